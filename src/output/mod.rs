//! Report construction and rendering.
//!
//! This module handles:
//! - Wrapping extraction results in a versioned report
//! - Rendering reports as JSON (pretty and compact)
//! - Rendering reports as plain text
//!
//! Reports are rendered to strings; the CLI prints them to stdout.

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{report_to_string, report_to_string_compact};
pub use report::{to_report, ExtractionReport};
pub use text::render_text;
