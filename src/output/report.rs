//! Report schema wrapping an extraction result.
//!
//! Schema is versioned to allow future evolution.

use crate::extractor::ExtractionResult;
use crate::parser::{ResponseBody, TraceSummary};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Session the trace belongs to, when the body carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// User the trace belongs to, when the body carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Number of trace entries read
    pub entry_count: usize,

    /// Recovered slot contents
    pub result: ExtractionResult,

    /// Per-agent call/response breakdown
    pub summary: TraceSummary,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Assemble a report from a body and its extraction result
///
/// **Public** - used by commands to create final output
pub fn to_report(body: &ResponseBody, result: ExtractionResult) -> ExtractionReport {
    use chrono::Utc;

    ExtractionReport {
        version: SCHEMA_VERSION.to_string(),
        session_id: body.session_id.clone(),
        user_id: body.user_id.clone(),
        entry_count: body.responses.len(),
        result,
        summary: TraceSummary::from_entries(&body.responses),
        generated_at: Utc::now().to_rfc3339(),
    }
}
