//! CLI output: error mapping from domain errors to localized CLI text.

use crate::cli::messages::{MessageKey, Messages};
use crate::error::ApiError;
use std::path::PathBuf;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError, messages: &Messages) -> String {
    match e {
        ApiError::Load { path, source } => messages.render(
            MessageKey::ErrLoad,
            &[
                ("path", path.display().to_string().as_str()),
                ("err", source.to_string().as_str()),
            ],
        ),
        ApiError::Save { path, source } => messages.render(
            MessageKey::ErrSave,
            &[
                ("path", path.display().to_string().as_str()),
                ("err", source.to_string().as_str()),
            ],
        ),
        ApiError::Halted { completed, source } => {
            let mut text = map_error(source, messages);
            if !completed.is_empty() {
                text.push_str("\n\n");
                text.push_str(&messages.render(
                    MessageKey::Partial,
                    &[("paths", join_paths(completed).as_str())],
                ));
            }
            text
        }
        ApiError::NoSelection(detail) => detail.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
