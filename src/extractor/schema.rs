//! Extraction result definitions.

use serde::{Deserialize, Serialize};

/// Named field of the extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Planning,
    ContentCreation,
    Optimization,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Planning, Slot::ContentCreation, Slot::Optimization];

    /// Human-readable step title
    pub fn title(self) -> &'static str {
        match self {
            Slot::Planning => "Planning Agent Output",
            Slot::ContentCreation => "Content Creation Output",
            Slot::Optimization => "Optimization Output",
        }
    }
}

/// Text recovered from one trace, one optional field per pipeline step.
///
/// Every field is independently optional; an unset field means nothing
/// usable was found for that step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Planning agent's plan with escapes normalized
    pub planning_content: Option<String>,

    /// Content-creation agent's response text
    pub content_creation_content: Option<String>,

    /// Last entry of the trace, verbatim
    pub optimization_content: Option<String>,
}

impl ExtractionResult {
    /// Return a copy with `slot` set to `value`
    pub fn with(self, slot: Slot, value: String) -> Self {
        match slot {
            Slot::Planning => Self {
                planning_content: Some(value),
                ..self
            },
            Slot::ContentCreation => Self {
                content_creation_content: Some(value),
                ..self
            },
            Slot::Optimization => Self {
                optimization_content: Some(value),
                ..self
            },
        }
    }

    /// Borrow the content of `slot`
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Planning => self.planning_content.as_deref(),
            Slot::ContentCreation => self.content_creation_content.as_deref(),
            Slot::Optimization => self.optimization_content.as_deref(),
        }
    }

    /// Number of slots that were filled
    pub fn filled_count(&self) -> usize {
        Slot::ALL.iter().filter(|slot| self.get(**slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }
}
