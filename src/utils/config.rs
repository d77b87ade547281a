//! Configuration and constants for the extractor.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Entry headers written by the orchestration service
pub const FUNCTION_RESPONSE_SIGNAL: &str = "Function Response:";
pub const FUNCTION_RESPONSE_PREFIX: &str = "Function Response:\n";
pub const FUNCTION_CALL_PREFIX: &str = "Function Call - ";

// Agent identifiers as they appear inside trace entries
pub const PLANNING_AGENT_ID: &str = "planning_agent";
pub const CONTENT_CREATION_AGENT_ID: &str = "content_creation_agent";
pub const OPTIMIZATION_AGENT_ID: &str = "optimization_distribution_agent";

/// Key that precedes the planning agent's embedded JSON plan
pub const AGENT_PLAN_MARKER: &str = "'agent_plan': '";

/// Foreign null token and its replacement
pub const NULL_SENTINEL: &str = "None";
pub const NULL_LITERAL: &str = "null";

/// Marker vocabulary used by the router.
///
/// `Default` gives the vocabulary of the content pipeline; tests and callers
/// talking to a renamed deployment can override individual markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Substring that flags an entry as a function response
    pub response_signal: String,

    /// Marker after which the content-creation payload starts
    pub response_prefix: String,

    /// Identifier of the planning agent
    pub planning_agent: String,

    /// Identifier of the content-creation agent
    pub content_creation_agent: String,

    /// Marker that precedes the planning region
    pub plan_marker: String,

    /// Token rewritten to `null_literal` in content-creation output
    pub null_sentinel: String,

    pub null_literal: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            response_signal: FUNCTION_RESPONSE_SIGNAL.to_string(),
            response_prefix: FUNCTION_RESPONSE_PREFIX.to_string(),
            planning_agent: PLANNING_AGENT_ID.to_string(),
            content_creation_agent: CONTENT_CREATION_AGENT_ID.to_string(),
            plan_marker: AGENT_PLAN_MARKER.to_string(),
            null_sentinel: NULL_SENTINEL.to_string(),
            null_literal: NULL_LITERAL.to_string(),
        }
    }
}
