//! Trace entry classification and summary statistics.
//!
//! The orchestration service writes three entry shapes:
//! `Function Call - <agent>:\n{...}`, `Function Response:\n{...}` and a
//! final plain-text answer.

use crate::utils::config::{
    CONTENT_CREATION_AGENT_ID, FUNCTION_CALL_PREFIX, FUNCTION_RESPONSE_SIGNAL,
    OPTIMIZATION_AGENT_ID, PLANNING_AGENT_ID,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key that carries the agent name inside a response record
const NAME_FIELD: &str = "'name': '";

/// Agent participating in the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentId {
    Planning,
    ContentCreation,
    Optimization,
    Other(String),
}

impl AgentId {
    /// Map an agent name as written in the trace
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            PLANNING_AGENT_ID => Self::Planning,
            CONTENT_CREATION_AGENT_ID => Self::ContentCreation,
            OPTIMIZATION_AGENT_ID => Self::Optimization,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Planning => PLANNING_AGENT_ID,
            Self::ContentCreation => CONTENT_CREATION_AGENT_ID,
            Self::Optimization => OPTIMIZATION_AGENT_ID,
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a single trace entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Orchestrator invoking an agent
    FunctionCall { agent: AgentId },
    /// Agent returning to the orchestrator; agent is unknown when the
    /// record carries no name field
    FunctionResponse { agent: Option<AgentId> },
    /// Final answer text
    FinalText,
}

impl EntryKind {
    /// Classify an entry by its header
    pub fn of(entry: &str) -> Self {
        if let Some(rest) = entry.strip_prefix(FUNCTION_CALL_PREFIX) {
            let name = rest.split([':', '\n']).next().unwrap_or(rest);
            return Self::FunctionCall {
                agent: AgentId::from_name(name),
            };
        }

        // Responses may carry a leading agent label before the signal
        if entry.contains(FUNCTION_RESPONSE_SIGNAL) {
            return Self::FunctionResponse {
                agent: response_agent(entry),
            };
        }

        Self::FinalText
    }
}

/// Read the agent name out of a response record
///
/// **Private** - internal helper for EntryKind::of
fn response_agent(entry: &str) -> Option<AgentId> {
    let start = entry.find(NAME_FIELD)? + NAME_FIELD.len();
    let len = entry[start..].find('\'')?;
    Some(AgentId::from_name(&entry[start..start + len]))
}

/// Aggregated counts over a trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Number of entries seen
    pub total_entries: u64,

    pub function_calls: u64,

    pub function_responses: u64,

    pub final_texts: u64,

    /// Calls per agent name
    pub calls_by_agent: BTreeMap<String, u64>,

    /// Responses per agent name (unnamed responses are not counted here)
    pub responses_by_agent: BTreeMap<String, u64>,
}

impl TraceSummary {
    /// Create new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a whole trace
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut summary = Self::new();
        for entry in entries {
            summary.add_entry(&EntryKind::of(entry.as_ref()));
        }
        summary
    }

    /// Add one classified entry to the summary
    pub fn add_entry(&mut self, kind: &EntryKind) {
        self.total_entries += 1;

        match kind {
            EntryKind::FunctionCall { agent } => {
                self.function_calls += 1;
                *self.calls_by_agent.entry(agent.to_string()).or_insert(0) += 1;
            }
            EntryKind::FunctionResponse { agent } => {
                self.function_responses += 1;
                if let Some(agent) = agent {
                    *self.responses_by_agent.entry(agent.to_string()).or_insert(0) += 1;
                }
            }
            EntryKind::FinalText => self.final_texts += 1,
        }
    }

    /// Calls that never got a response, per agent
    pub fn pending_calls(&self) -> Vec<(String, u64)> {
        self.calls_by_agent
            .iter()
            .filter_map(|(agent, calls)| {
                let answered = self.responses_by_agent.get(agent).copied().unwrap_or(0);
                (*calls > answered).then(|| (agent.clone(), calls - answered))
            })
            .collect()
    }
}
