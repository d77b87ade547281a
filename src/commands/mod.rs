//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod extract;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use extract::{execute_extract, run_extract, validate_args};
pub use models::{ExtractArgs, OutputFormat};
pub use utils::{display_schema, display_version};
