//! Extract command implementation.
//!
//! The extract command:
//! 1. Reads the response body (file or stdin)
//! 2. Runs the extractor over the trace entries
//! 3. Builds the report
//! 4. Prints it as JSON or text

use super::models::{ExtractArgs, OutputFormat};
use crate::extractor::extract;
use crate::output::{render_text, report_to_string, report_to_string_compact, to_report};
use crate::parser::{read_response_body, read_response_from, ResponseBody};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the extract command and print the report to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or unreadable
/// * Malformed response body
///
/// Extraction itself never fails; unrecovered slots are reported as unset.
pub fn execute_extract(args: ExtractArgs) -> Result<()> {
    let rendered = run_extract(&args)?;
    println!("{}", rendered);
    Ok(())
}

/// Run the extract pipeline and return the rendered report
///
/// **Public** - used by execute_extract and tests
pub fn run_extract(args: &ExtractArgs) -> Result<String> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading response body...");
    let body = load_body(args)?;
    debug!("Loaded {} trace entries", body.responses.len());

    info!("Step 2/3: Extracting pipeline outputs...");
    let result = extract(&body.responses);
    info!("Recovered {}/3 slots", result.filled_count());

    info!("Step 3/3: Rendering report...");
    let report = to_report(&body, result);
    let rendered = match args.format {
        OutputFormat::Json if args.compact => report_to_string_compact(&report)?,
        OutputFormat::Json => report_to_string(&report)?,
        OutputFormat::Text => render_text(&report, args.print_summary),
    };

    debug!("Extract completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(rendered)
}

/// Read the body from the input file, or stdin when none is given
///
/// **Private** - internal helper for run_extract
fn load_body(args: &ExtractArgs) -> Result<ResponseBody> {
    match &args.input {
        Some(path) => read_response_body(path)
            .with_context(|| format!("Failed to read response body from {}", path.display())),
        None => {
            debug!("No input file given, reading stdin");
            read_response_from(std::io::stdin().lock())
                .context("Failed to read response body from stdin")
        }
    }
}

/// Validate extract arguments
///
/// **Public** - can be called before execute_extract for early validation
pub fn validate_args(args: &ExtractArgs) -> Result<()> {
    if let Some(path) = &args.input {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Input path cannot be empty");
        }

        if path.is_dir() {
            anyhow::bail!("Input path is a directory: {}", path.display());
        }

        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    if args.compact && args.format != OutputFormat::Json {
        anyhow::bail!("--compact only applies to JSON output");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn body_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_args_stdin() {
        assert!(validate_args(&ExtractArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_missing_file() {
        let args = ExtractArgs {
            input: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ExtractArgs {
            input: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_compact_text() {
        let args = ExtractArgs {
            format: OutputFormat::Text,
            compact: true,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_run_extract_json() {
        let file = body_file(
            r#"{"responses": ["Function Response:\ncontent_creation_agent says hi", "last"], "session_id": "s1"}"#,
        );
        let args = ExtractArgs {
            input: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let rendered = run_extract(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["session_id"], "s1");
        assert_eq!(value["entry_count"], 2);
        assert_eq!(value["result"]["optimizationContent"], "last");
        assert_eq!(
            value["result"]["contentCreationContent"],
            "content_creation_agent says hi"
        );
        assert!(value["result"]["planningContent"].is_null());
    }

    #[test]
    fn test_run_extract_malformed_body() {
        let file = body_file("not json");
        let args = ExtractArgs {
            input: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        assert!(run_extract(&args).is_err());
    }
}
