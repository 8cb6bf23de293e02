//! CLI domain: parse, route, prompts, output, and presentation only.
//! This is the interactive layer around the batch resolver; it owns language
//! selection and message text.

mod messages;
mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use messages::{Lang, MessageKey, Messages};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_report_json, format_report_text};
pub use prompt::{default_browse_dir, json_files_in};
pub use route::{CommandOutput, RunContext};
