//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::batch::{self, BatchOptions, BatchReport, FailurePolicy, NamingPattern, OutputPolicy};
use crate::cli::messages::{Lang, Messages};
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_report_json, format_report_text};
use crate::cli::prompt;
use crate::config::{BindsyncConfig, ConfigLoader};
use crate::document::load_document;
use crate::error::ApiError;
use crate::merge::apply_binds;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// Text to print and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}

/// Runtime context for CLI execution: loaded configuration and message catalog.
pub struct RunContext {
    config: BindsyncConfig,
    messages: Messages,
    color: bool,
}

impl RunContext {
    /// Load configuration (explicit file or workspace layering) and pick the language.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        lang: Option<&str>,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        let lang = Lang::detect(lang.or(config.ui.language.as_deref()));
        let mut ctx = Self::with_config(config, lang);
        ctx.color = std::io::stdout().is_terminal();
        Ok(ctx)
    }

    /// Context without terminal colors, for embedding and tests.
    pub fn with_config(config: BindsyncConfig, lang: Lang) -> Self {
        Self {
            config,
            messages: Messages::new(lang),
            color: false,
        }
    }

    pub fn config(&self) -> &BindsyncConfig {
        &self.config
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Apply {
                source,
                targets,
                output_file,
                output_dir,
                ask,
                pattern,
                keep_going,
                format,
            } => self.handle_apply(ApplyArgs {
                source: source.clone(),
                targets: targets.clone(),
                output_file: output_file.clone(),
                output_dir: output_dir.clone(),
                ask: *ask,
                pattern: pattern.clone(),
                keep_going: *keep_going,
                format: format.clone(),
            }),
            Commands::Preview { source, target } => self.handle_preview(source, target),
            Commands::Config => self.handle_config(),
        }
    }

    fn handle_apply(&self, args: ApplyArgs) -> Result<CommandOutput, ApiError> {
        let options = self.batch_options(args.pattern.as_deref(), args.keep_going)?;
        let browse_dir = prompt::default_browse_dir(&self.config.ui);

        let source = match args.source {
            Some(path) => path,
            None => prompt::pick_source(&browse_dir, &self.messages)?,
        };
        let targets = if args.targets.is_empty() {
            prompt::pick_targets(&browse_dir, &self.messages)?
        } else {
            args.targets
        };

        let policy = self.output_policy(
            targets.len(),
            args.ask,
            args.output_file,
            args.output_dir,
        )?;
        debug!(?policy, targets = targets.len(), "Resolved output policy");

        let report = batch::run(&batch::BatchRequest::new(source, targets, policy), &options)?;
        self.render_report(&report, &args.format)
    }

    fn batch_options(
        &self,
        pattern: Option<&str>,
        keep_going: bool,
    ) -> Result<BatchOptions, ApiError> {
        let mut options = self.config.batch.options();
        if let Some(pattern) = pattern {
            options.pattern = NamingPattern::new(pattern)?;
        }
        if keep_going {
            options.on_error = FailurePolicy::Continue;
        }
        Ok(options)
    }

    /// Explicit flags win. Otherwise the configured/`--ask` choice decides
    /// whether to prompt for a file (one target) or a folder (several).
    fn output_policy(
        &self,
        target_count: usize,
        ask: bool,
        output_file: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<OutputPolicy, ApiError> {
        if output_file.is_some() {
            return Ok(OutputPolicy::ExplicitFile(output_file));
        }
        if output_dir.is_some() {
            return Ok(OutputPolicy::ExplicitDirectory(output_dir));
        }
        let selector =
            OutputPolicy::selector_for(ask || self.config.batch.ask_where_to_save, target_count);
        let (file, dir) = match selector {
            batch::PolicySelector::Sibling => (None, None),
            batch::PolicySelector::ExplicitFile => (prompt::ask_output_file(&self.messages)?, None),
            batch::PolicySelector::ExplicitDirectory => {
                (None, prompt::ask_output_dir(&self.messages)?)
            }
        };
        Ok(OutputPolicy::select(selector, file, dir))
    }

    fn render_report(&self, report: &BatchReport, format: &str) -> Result<CommandOutput, ApiError> {
        let text = if format == "json" {
            format_report_json(report)?
        } else {
            format_report_text(report, &self.messages, self.color)
        };
        Ok(CommandOutput {
            text,
            exit_code: if report.is_complete() { 0 } else { 1 },
        })
    }

    fn handle_preview(
        &self,
        source: &std::path::Path,
        target: &std::path::Path,
    ) -> Result<CommandOutput, ApiError> {
        let source_doc = load_document(source).map_err(|e| ApiError::Load {
            path: source.to_path_buf(),
            source: e,
        })?;
        let target_doc = load_document(target).map_err(|e| ApiError::Load {
            path: target.to_path_buf(),
            source: e,
        })?;
        let merged = apply_binds(&source_doc, target_doc);
        let text = merged
            .to_pretty_string()
            .map_err(|e| ApiError::ConfigError(format!("Failed to render document: {}", e)))?;
        Ok(CommandOutput::success(text))
    }

    fn handle_config(&self) -> Result<CommandOutput, ApiError> {
        let text = toml::to_string_pretty(&self.config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))?;
        Ok(CommandOutput::success(text))
    }
}

struct ApplyArgs {
    source: Option<PathBuf>,
    targets: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    ask: bool,
    pattern: Option<String>,
    keep_going: bool,
    format: String,
}
