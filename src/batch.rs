//! Batch output resolver: apply one source to many targets and decide where
//! each merged result is written.

mod pattern;
mod policy;
mod run;

pub use pattern::{NamingPattern, BASE_PLACEHOLDER, DEFAULT_NAMING_PATTERN};
pub use policy::{
    resolve_output_path, sibling_output_path, target_stem, FailurePolicy, OutputPolicy,
    PolicySelector, Resolution,
};
pub use run::{
    apply_to_targets, run, BatchOptions, BatchReport, BatchRequest, TargetFailure, TargetOutput,
};
