//! Agent Trace Extractor
//!
//! Recovers the outputs of a multi-agent content pipeline from the raw
//! diagnostic trace an orchestration service returns.
//!
//! The trace entries are dictionary-literal text, not JSON. The extractor
//! locates regions by counting braces outside string literals and never
//! fails: anything it cannot recover is left unset.
//!
//! ```
//! use agent_trace_extractor::extractor::extract;
//!
//! let entries = [
//!     "Function Response:\n{ 'name': 'planning_agent', 'response': { 'agent_plan': '{\"content_format\": \"X\"}'} }",
//!     "Final answer",
//! ];
//! let result = extract(&entries);
//! assert_eq!(result.planning_content.as_deref(), Some("{\"content_format\": \"X\"}"));
//! assert_eq!(result.optimization_content.as_deref(), Some("Final answer"));
//! ```

pub mod commands;
pub mod extractor;
pub mod output;
pub mod parser;
pub mod utils;
