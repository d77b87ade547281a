//! JSON report rendering.

use super::report::ExtractionReport;
use crate::utils::error::OutputError;
use log::debug;

/// Render a report as pretty-printed JSON
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn report_to_string(report: &ExtractionReport) -> Result<String, OutputError> {
    let text = serde_json::to_string_pretty(report)?;
    debug!("Rendered report ({} bytes)", text.len());
    Ok(text)
}

/// Render a report as single-line JSON
pub fn report_to_string_compact(report: &ExtractionReport) -> Result<String, OutputError> {
    serde_json::to_string(report).map_err(OutputError::SerializationFailed)
}
