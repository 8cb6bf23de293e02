//! CLI parse: clap types for bindsync. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bindsync - apply keybindings from one JSON configuration to others
#[derive(Parser)]
#[command(name = "bindsync", version)]
#[command(about = "Apply \"key\" bindings from a source JSON configuration to one or more targets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for bindsync.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (replaces global and workspace files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Message language (en, fr); detected from the locale by default
    #[arg(long)]
    pub lang: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the source's bindings to each target and write the results
    Apply {
        /// Source document (prompted for when omitted)
        #[arg(long, short = 's')]
        source: Option<PathBuf>,

        /// Target document; repeat for several (prompted for when omitted)
        #[arg(long = "target", short = 't')]
        targets: Vec<PathBuf>,

        /// Write the single target's result to this file
        #[arg(long, conflicts_with = "output_dir")]
        output_file: Option<PathBuf>,

        /// Write every result into this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Ask where to save instead of writing beside each target
        #[arg(long)]
        ask: bool,

        /// Output file name pattern; {base} is the target file name without extension.
        /// Must be a plain file name: '/' and '\' are rejected
        #[arg(long)]
        pattern: Option<String>,

        /// Keep processing remaining targets after a failure
        #[arg(long)]
        keep_going: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the merged document for one target without writing anything
    Preview {
        #[arg(long, short = 's')]
        source: PathBuf,

        #[arg(long, short = 't')]
        target: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
}
