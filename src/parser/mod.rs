//! Response body parsing and entry classification.
//!
//! This module handles:
//! - Decoding the orchestration service's JSON body
//! - Classifying entries as calls, responses or final text
//! - Summarizing per-agent activity

pub mod entry;
pub mod response;

// Re-export main types
pub use entry::{AgentId, EntryKind, TraceSummary};
pub use response::{
    parse_response_body, parse_response_str, read_response_body, read_response_from,
    ResponseBody,
};
