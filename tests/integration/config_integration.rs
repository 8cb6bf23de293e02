//! Integration tests for Configuration System

use bindsync::batch::FailurePolicy;
use bindsync::config::{ConfigLoader, WORKSPACE_CONFIG_FILE};
use bindsync::error::ApiError;
use tempfile::TempDir;

use crate::integration::with_env;

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_file,
        r#"
[batch]
naming_pattern = "{base}.synced.json"
ask_where_to_save = true
on_error = "continue"

[ui]
language = "fr"
default_dir = "/games/config"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = with_env(&[], || ConfigLoader::load_from_file(&config_file).unwrap());

    assert_eq!(config.batch.naming_pattern.render("pvp"), "pvp.synced.json");
    assert!(config.batch.ask_where_to_save);
    assert_eq!(config.batch.on_error, FailurePolicy::Continue);
    assert_eq!(config.ui.language.as_deref(), Some("fr"));
    assert_eq!(
        config.ui.default_dir.as_deref(),
        Some(std::path::Path::new("/games/config"))
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_workspace_file_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        "[batch]\nnaming_pattern = \"synced_{base}.json\"\n",
    )
    .unwrap();

    let config = with_env(&[("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap())], || {
        ConfigLoader::load(temp_dir.path()).unwrap()
    });

    assert_eq!(config.batch.naming_pattern.render("a"), "synced_a.json");
    assert_eq!(config.batch.on_error, FailurePolicy::Halt);
}

#[test]
fn test_missing_workspace_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = with_env(&[("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap())], || {
        ConfigLoader::load(temp_dir.path()).unwrap()
    });
    assert_eq!(config.batch.naming_pattern.as_str(), "{base}_mybind.json");
    assert!(!config.batch.ask_where_to_save);
}

#[test]
fn test_pattern_without_placeholder_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[batch]\nnaming_pattern = \"out.json\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn test_invalid_language_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("lang.toml");
    std::fs::write(&config_file, "[ui]\nlanguage = \"de\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&config_file).unwrap_err();
    assert!(err.to_string().contains("Unsupported language 'de'"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_environment_overrides_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        "[batch]\non_error = \"halt\"\nask_where_to_save = false\n",
    )
    .unwrap();

    let config = with_env(
        &[
            ("BINDSYNC__BATCH__ON_ERROR", "continue"),
            ("BINDSYNC__BATCH__ASK_WHERE_TO_SAVE", "true"),
        ],
        || ConfigLoader::load(temp_dir.path()).unwrap(),
    );

    assert_eq!(config.batch.on_error, FailurePolicy::Continue);
    assert!(config.batch.ask_where_to_save);
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_file_is_overridden_by_workspace_file() {
    let config_home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let global_dir = config_home.path().join("bindsync");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.toml"),
        "[batch]\nnaming_pattern = \"global_{base}.json\"\non_error = \"continue\"\n",
    )
    .unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[batch]\nnaming_pattern = \"local_{base}.json\"\n",
    )
    .unwrap();

    let config = with_env(
        &[("XDG_CONFIG_HOME", config_home.path().to_str().unwrap())],
        || ConfigLoader::load(workspace.path()).unwrap(),
    );

    assert_eq!(config.batch.naming_pattern.render("a"), "local_a.json");
    assert_eq!(config.batch.on_error, FailurePolicy::Continue);
}
