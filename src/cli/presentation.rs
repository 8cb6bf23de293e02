//! Presentation: batch report formatters (text and json).

use crate::batch::BatchReport;
use crate::cli::messages::{MessageKey, Messages};
use crate::cli::output::{join_paths, map_error};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_report_text(report: &BatchReport, messages: &Messages, color: bool) -> String {
    let written = report.written_paths();
    let mut text = match written.as_slice() {
        [] => String::new(),
        [single] => messages.render(
            MessageKey::DoneSingle,
            &[("path", single.display().to_string().as_str())],
        ),
        many => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Target", "Output", "Copied", "Stripped"]);
            for output in &report.outputs {
                table.add_row(vec![
                    output.target.display().to_string(),
                    output.output.display().to_string(),
                    output.summary.copied.to_string(),
                    output.summary.stripped.to_string(),
                ]);
            }
            format!(
                "{}\n\n{}",
                messages.render(MessageKey::DoneMulti, &[("paths", join_paths(many).as_str())]),
                table
            )
        }
    };

    if color && !text.is_empty() {
        text = text.green().to_string();
    }

    if !report.failures.is_empty() {
        let lines = report
            .failures
            .iter()
            .map(|failure| map_error(&failure.error, messages))
            .collect::<Vec<_>>()
            .join("\n");
        let failures = messages.render(MessageKey::Failures, &[("paths", lines.as_str())]);
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        if color {
            text.push_str(&failures.red().to_string());
        } else {
            text.push_str(&failures);
        }
    }

    text
}

pub fn format_report_json(report: &BatchReport) -> Result<String, ApiError> {
    let outputs: Vec<serde_json::Value> = report
        .outputs
        .iter()
        .map(|o| {
            serde_json::json!({
                "target": o.target.display().to_string(),
                "output": o.output.display().to_string(),
                "copied": o.summary.copied,
                "stripped": o.summary.stripped,
            })
        })
        .collect();
    let failures: Vec<serde_json::Value> = report
        .failures
        .iter()
        .map(|f| {
            serde_json::json!({
                "target": f.target.display().to_string(),
                "error": f.error.to_string(),
            })
        })
        .collect();
    let out = serde_json::json!({ "outputs": outputs, "failures": failures });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::ConfigError(format!("Failed to render report: {}", e)))
}
