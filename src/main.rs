//! Agent Trace Extractor CLI
//!
//! Reads an orchestration service response body and prints the recovered
//! planning, content-creation and optimization outputs.

use agent_trace_extractor::commands::{
    display_schema, display_version, execute_extract, validate_args, ExtractArgs, OutputFormat,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Agent Trace Extractor - pipeline outputs from orchestration traces
#[derive(Parser, Debug)]
#[command(name = "trace-extract")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract pipeline outputs from a response body
    Extract {
        /// Response body JSON file (reads stdin if omitted)
        #[arg(short, long, env = "TRACE_EXTRACT_INPUT")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Append the per-agent trace breakdown (text output)
        #[arg(long)]
        summary: bool,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout carries only the report)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Extract {
            input,
            format,
            compact,
            summary,
        } => {
            let args = ExtractArgs {
                input,
                format,
                compact,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_extract(args)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
