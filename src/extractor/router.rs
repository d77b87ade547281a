//! Trace classifier and router.
//!
//! Walks the entries once, decides which slot (if any) each entry feeds,
//! and hands it to the scanner/normalizer or the splitter. The result is
//! built by a single fold; the optimization slot is always the last entry.

use super::normalizer::normalize_escapes;
use super::scanner::scan_region;
use super::schema::{ExtractionResult, Slot};
use super::splitter::split_segment;
use crate::utils::config::ExtractorConfig;
use crate::utils::error::ExtractError;
use log::{debug, warn};

/// Slot an entry can be routed to by content.
///
/// The optimization slot is filled positionally and has no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Planning,
    ContentCreation,
}

impl Route {
    /// Result field this route fills
    pub fn slot(self) -> Slot {
        match self {
            Route::Planning => Slot::Planning,
            Route::ContentCreation => Slot::ContentCreation,
        }
    }
}

/// Extract all slots using the default marker vocabulary
///
/// **Public** - main entry point for extraction
///
/// Never fails: anything that cannot be recovered leaves its slot unset.
pub fn extract<S: AsRef<str>>(entries: &[S]) -> ExtractionResult {
    extract_with_config(entries, &ExtractorConfig::default())
}

/// Extract all slots using a custom marker vocabulary
///
/// # Arguments
/// * `entries` - Trace entries in the order the service returned them
/// * `config` - Markers and agent identifiers to route on
///
/// # Returns
/// The assembled result. Later matches for a slot overwrite earlier ones;
/// an empty trace yields a result with every slot unset.
pub fn extract_with_config<S: AsRef<str>>(
    entries: &[S],
    config: &ExtractorConfig,
) -> ExtractionResult {
    debug!("Extracting from {} trace entries", entries.len());

    let routed = entries
        .iter()
        .enumerate()
        .fold(ExtractionResult::default(), |acc, (index, entry)| {
            let entry = entry.as_ref();
            let Some(route) = classify(entry, config) else {
                return acc;
            };
            let slot = route.slot();

            match extract_slot(entry, route, config) {
                Ok(content) => {
                    debug!("Entry {} filled {:?} ({} bytes)", index, slot, content.len());
                    acc.with(slot, content)
                }
                Err(e) => {
                    log_miss(index, slot, &e);
                    acc
                }
            }
        });

    match entries.last() {
        Some(last) => routed.with(Slot::Optimization, last.as_ref().to_string()),
        None => {
            debug!("Empty trace, nothing to extract");
            routed
        }
    }
}

/// Decide which slot an entry feeds
///
/// **Public** - exposed for diagnostics and tests
///
/// Only function responses are routed. When an entry names both agents
/// the planning route takes precedence.
pub fn classify(entry: &str, config: &ExtractorConfig) -> Option<Route> {
    if !entry.contains(config.response_signal.as_str()) {
        return None;
    }

    if entry.contains(config.planning_agent.as_str()) {
        Some(Route::Planning)
    } else if entry.contains(config.content_creation_agent.as_str()) {
        Some(Route::ContentCreation)
    } else {
        None
    }
}

/// Run the extraction strategy for a classified entry
///
/// **Private** - internal helper for extract_with_config
fn extract_slot(entry: &str, route: Route, config: &ExtractorConfig) -> Result<String, ExtractError> {
    match route {
        Route::Planning => {
            let region = scan_region(entry, &config.plan_marker)?;
            Ok(normalize_escapes(region.slice(entry)))
        }
        Route::ContentCreation => split_segment(
            entry,
            &config.response_prefix,
            &config.null_sentinel,
            &config.null_literal,
        ),
    }
}

/// Log a slot that could not be filled
///
/// **Private** - internal helper for extract_with_config
fn log_miss(index: usize, slot: Slot, error: &ExtractError) {
    match error {
        ExtractError::UnbalancedDelimiters { .. } => {
            warn!("Entry {} matched {:?} but extraction failed: {}", index, slot, error)
        }
        ExtractError::MarkerNotFound(_) | ExtractError::NoRegion => {
            debug!("Entry {} matched {:?} but has no payload: {}", index, slot, error)
        }
    }
}
