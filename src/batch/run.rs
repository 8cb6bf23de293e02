//! Batch execution: load the source once, then load, merge, and save each target in order.

use super::pattern::NamingPattern;
use super::policy::{resolve_output_path, FailurePolicy, OutputPolicy, PolicySelector, Resolution};
use crate::document::{load_document, save_document, ConfigDocument};
use crate::error::ApiError;
use crate::merge::{apply_binds_with_summary, MergeSummary};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Inputs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub source: PathBuf,
    /// Processed in order. Duplicates are processed again.
    pub targets: Vec<PathBuf>,
    pub policy: OutputPolicy,
}

impl BatchRequest {
    pub fn new(source: impl Into<PathBuf>, targets: Vec<PathBuf>, policy: OutputPolicy) -> Self {
        Self {
            source: source.into(),
            targets,
            policy,
        }
    }
}

/// Run-time settings passed explicitly into each run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub pattern: NamingPattern,
    pub on_error: FailurePolicy,
}

/// One successfully written target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutput {
    pub target: PathBuf,
    pub output: PathBuf,
    pub resolution: Resolution,
    pub summary: MergeSummary,
}

/// One target that could not be processed.
#[derive(Debug)]
pub struct TargetFailure {
    pub target: PathBuf,
    pub error: ApiError,
}

/// Outcome of a batch run, in target order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outputs: Vec<TargetOutput>,
    /// Always empty under `FailurePolicy::Halt`.
    pub failures: Vec<TargetFailure>,
}

impl BatchReport {
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.outputs.iter().map(|o| o.output.clone()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Apply the source's bindings to every target and write the results.
///
/// A source that cannot be loaded fails the whole run before anything is written.
/// Target failures either halt the run (returning `ApiError::Halted` with the
/// outputs already written) or are collected, depending on `options.on_error`.
/// Outputs written before a failure are never removed.
pub fn run(request: &BatchRequest, options: &BatchOptions) -> Result<BatchReport, ApiError> {
    if request.targets.is_empty() {
        return Err(ApiError::NoTargets);
    }

    let source = load_document(&request.source).map_err(|source| ApiError::Load {
        path: request.source.clone(),
        source,
    })?;
    info!(
        source = %request.source.display(),
        targets = request.targets.len(),
        "Applying key bindings"
    );

    let target_count = request.targets.len();
    let mut report = BatchReport::default();

    for target in &request.targets {
        match process_target(&source, target, &request.policy, options, target_count) {
            Ok(output) => {
                info!(
                    target = %target.display(),
                    output = %output.output.display(),
                    copied = output.summary.copied,
                    "Wrote merged document"
                );
                report.outputs.push(output);
            }
            Err(error) => match options.on_error {
                FailurePolicy::Halt => {
                    return Err(ApiError::Halted {
                        completed: report.written_paths(),
                        source: Box::new(error),
                    });
                }
                FailurePolicy::Continue => {
                    warn!(target = %target.display(), error = %error, "Skipping target");
                    report.failures.push(TargetFailure {
                        target: target.clone(),
                        error,
                    });
                }
            },
        }
    }

    Ok(report)
}

fn process_target(
    source: &ConfigDocument,
    target: &Path,
    policy: &OutputPolicy,
    options: &BatchOptions,
    target_count: usize,
) -> Result<TargetOutput, ApiError> {
    let document = load_document(target).map_err(|source| ApiError::Load {
        path: target.to_path_buf(),
        source,
    })?;
    let (merged, summary) = apply_binds_with_summary(source, document);
    let (output, resolution) = resolve_output_path(target, policy, &options.pattern, target_count);
    save_document(&merged, &output).map_err(|source| ApiError::Save {
        path: output.clone(),
        source,
    })?;
    Ok(TargetOutput {
        target: target.to_path_buf(),
        output,
        resolution,
        summary,
    })
}

/// Entry point for UI layers: paths, a policy selector, and any explicit locations.
pub fn apply_to_targets(
    source: &Path,
    targets: &[PathBuf],
    selector: PolicySelector,
    output_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    options: &BatchOptions,
) -> Result<BatchReport, ApiError> {
    let request = BatchRequest::new(
        source,
        targets.to_vec(),
        OutputPolicy::select(selector, output_file, output_dir),
    );
    run(&request, options)
}
