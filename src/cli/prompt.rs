//! Interactive selection of source, targets, and output locations.

use crate::cli::messages::{MessageKey, Messages};
use crate::config::UiSettings;
use crate::error::ApiError;
use dialoguer::{Input, MultiSelect, Select};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory listed by the pickers.
///
/// `ui.default_dir` when it exists, else `%APPDATA%\.minecraft\config\Myau`,
/// else `%APPDATA%\.minecraft\config`, else the home directory.
pub fn default_browse_dir(ui: &UiSettings) -> PathBuf {
    if let Some(dir) = ui.default_dir.as_ref().filter(|dir| dir.is_dir()) {
        return dir.clone();
    }
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    browse_dir_from(std::env::var_os("APPDATA").map(PathBuf::from), home)
}

fn browse_dir_from(appdata: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    if let Some(appdata) = appdata {
        let config_dir = appdata.join(".minecraft").join("config");
        let module_dir = config_dir.join("Myau");
        if module_dir.is_dir() {
            return module_dir;
        }
        if config_dir.is_dir() {
            return config_dir;
        }
    }
    home.unwrap_or_else(|| PathBuf::from("."))
}

/// `*.json` files directly inside `dir`, sorted by name.
pub fn json_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

fn cancelled(messages: &Messages) -> ApiError {
    ApiError::NoSelection(messages.text(MessageKey::Cancelled).to_string())
}

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::ConfigError(format!("Failed to get user input: {}", e))
}

fn listed_files(dir: &Path, messages: &Messages) -> Result<(Vec<PathBuf>, Vec<String>), ApiError> {
    let files = json_files_in(dir);
    if files.is_empty() {
        let shown = dir.display().to_string();
        return Err(ApiError::NoSelection(
            messages.render(MessageKey::NoJsonFiles, &[("path", shown.as_str())]),
        ));
    }
    let labels = files
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect();
    Ok((files, labels))
}

pub fn pick_source(dir: &Path, messages: &Messages) -> Result<PathBuf, ApiError> {
    let (files, labels) = listed_files(dir, messages)?;
    let choice = Select::new()
        .with_prompt(messages.text(MessageKey::SelectSource))
        .items(labels.as_slice())
        .default(0)
        .interact_opt()
        .map_err(input_error)?;
    choice
        .map(|index| files[index].clone())
        .ok_or_else(|| cancelled(messages))
}

pub fn pick_targets(dir: &Path, messages: &Messages) -> Result<Vec<PathBuf>, ApiError> {
    let (files, labels) = listed_files(dir, messages)?;
    let chosen = MultiSelect::new()
        .with_prompt(messages.text(MessageKey::SelectTargets))
        .items(labels.as_slice())
        .interact_opt()
        .map_err(input_error)?
        .unwrap_or_default();
    if chosen.is_empty() {
        return Err(cancelled(messages));
    }
    Ok(chosen.into_iter().map(|index| files[index].clone()).collect())
}

/// Blank answer means "no explicit location".
fn ask_path(prompt: &str) -> Result<Option<PathBuf>, ApiError> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

pub fn ask_output_file(messages: &Messages) -> Result<Option<PathBuf>, ApiError> {
    ask_path(messages.text(MessageKey::AskOutputFile))
}

pub fn ask_output_dir(messages: &Messages) -> Result<Option<PathBuf>, ApiError> {
    ask_path(messages.text(MessageKey::AskOutputDir))
}
