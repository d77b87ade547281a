use clap::ValueEnum;
use std::path::PathBuf;

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Versioned JSON report
    #[default]
    Json,
    /// Titled text sections, one per pipeline step
    Text,
}

/// Arguments for the extract command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Response body file (stdin when None)
    pub input: Option<PathBuf>,

    /// Output format
    pub format: OutputFormat,

    /// Single-line JSON instead of pretty-printed
    pub compact: bool,

    /// Append the per-agent trace breakdown to text output
    pub print_summary: bool,
}
