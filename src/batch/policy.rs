//! Output-location policy and output path resolution.

use super::pattern::NamingPattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where merged documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Beside each target, named by the pattern.
    Sibling,
    /// One caller-chosen file. Only honored for a single target.
    ExplicitFile(Option<PathBuf>),
    /// One caller-chosen directory, names from the pattern.
    ExplicitDirectory(Option<PathBuf>),
}

/// Policy selector used at the UI boundary, before explicit locations are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicySelector {
    Sibling,
    ExplicitFile,
    ExplicitDirectory,
}

impl OutputPolicy {
    /// Combine a selector with whatever explicit locations the caller obtained.
    pub fn select(
        selector: PolicySelector,
        output_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        match selector {
            PolicySelector::Sibling => OutputPolicy::Sibling,
            PolicySelector::ExplicitFile => OutputPolicy::ExplicitFile(output_file),
            PolicySelector::ExplicitDirectory => OutputPolicy::ExplicitDirectory(output_dir),
        }
    }

    /// Selector the original tool used: sibling unless asking, then file for one
    /// target and directory for several.
    pub fn selector_for(ask_where_to_save: bool, target_count: usize) -> PolicySelector {
        match (ask_where_to_save, target_count) {
            (false, _) => PolicySelector::Sibling,
            (true, 1) => PolicySelector::ExplicitFile,
            (true, _) => PolicySelector::ExplicitDirectory,
        }
    }
}

/// Why a given output path was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Sibling,
    ExplicitFile,
    ExplicitDirectory,
}

/// File name without its last extension. Empty when the path has no file name.
pub fn target_stem(target: &Path) -> String {
    target
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<target dir>/<pattern(stem)>`.
pub fn sibling_output_path(target: &Path, pattern: &NamingPattern) -> PathBuf {
    let dir = target.parent().unwrap_or_else(|| Path::new(""));
    dir.join(pattern.render(&target_stem(target)))
}

/// Compute the output path for one target.
///
/// `target_count` is the size of the whole batch; an explicit file only applies
/// when it is 1.
pub fn resolve_output_path(
    target: &Path,
    policy: &OutputPolicy,
    pattern: &NamingPattern,
    target_count: usize,
) -> (PathBuf, Resolution) {
    match policy {
        OutputPolicy::ExplicitFile(Some(file)) if target_count == 1 => {
            (file.clone(), Resolution::ExplicitFile)
        }
        OutputPolicy::ExplicitDirectory(Some(dir)) => (
            dir.join(pattern.render(&target_stem(target))),
            Resolution::ExplicitDirectory,
        ),
        _ => (sibling_output_path(target, pattern), Resolution::Sibling),
    }
}

/// What to do when a target fails to load or save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing target.
    #[default]
    Halt,
    /// Record the failure and move on to the next target.
    Continue,
}
