//! Recovering extractor for orchestration trace responses.
//!
//! This module handles:
//! - Locating balanced `{...}` regions after a marker (scanner)
//! - Un-escaping quotes and backslashes (normalizer)
//! - Taking plain-text responses after a marker (splitter)
//! - Routing entries to slots and assembling the result (router)
//!
//! Extraction never fails the caller; a slot that cannot be recovered is
//! simply left unset.

pub mod normalizer;
pub mod router;
pub mod scanner;
pub mod schema;
pub mod splitter;

// Re-export main types
pub use normalizer::normalize_escapes;
pub use router::{classify, extract, extract_with_config, Route};
pub use scanner::{find_region_end, scan_region, Region, ScanMode};
pub use schema::{ExtractionResult, Slot};
pub use splitter::{replace_sentinel, split_response, split_segment};
