//! Bindsync: apply keybindings between JSON configurations
//!
//! Copies the `key` field of every module from a source configuration document
//! onto the matching modules of one or more target documents, stripping any
//! binding the source does not define, and writes each result to a path chosen
//! by an output-location policy.

pub mod batch;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod merge;

pub use batch::{apply_to_targets, run, BatchOptions, BatchReport, BatchRequest, OutputPolicy};
pub use document::{ConfigDocument, ModuleEntry};
pub use error::{ApiError, DocumentError};
pub use merge::apply_binds;
