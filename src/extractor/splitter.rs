//! Segment splitter for plain-text function responses.
//!
//! Takes everything after the response marker and canonicalizes the
//! foreign null token. No structural decoding is attempted.

use crate::utils::config::{NULL_LITERAL, NULL_SENTINEL};
use crate::utils::error::ExtractError;
use log::warn;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static DEFAULT_SENTINEL: OnceLock<Option<Regex>> = OnceLock::new();

/// Extract the trimmed remainder after `marker`
///
/// # Errors
/// * `ExtractError::MarkerNotFound` - Marker absent from the entry
pub fn split_segment(
    entry: &str,
    marker: &str,
    null_sentinel: &str,
    null_literal: &str,
) -> Result<String, ExtractError> {
    let marker_at = entry
        .find(marker)
        .ok_or_else(|| ExtractError::MarkerNotFound(marker.to_string()))?;

    let remainder = entry[marker_at + marker.len()..].trim();
    Ok(replace_sentinel(remainder, null_sentinel, null_literal).into_owned())
}

/// Replace whole-token occurrences of `sentinel` with `literal`
///
/// `NoneType` or `is_None` are left alone; only standalone tokens change.
pub fn replace_sentinel<'a>(text: &'a str, sentinel: &str, literal: &str) -> Cow<'a, str> {
    if sentinel.is_empty() || !text.contains(sentinel) {
        return Cow::Borrowed(text);
    }

    let compiled;
    let re = if sentinel == NULL_SENTINEL {
        DEFAULT_SENTINEL
            .get_or_init(|| token_regex(NULL_SENTINEL))
            .as_ref()
    } else {
        compiled = token_regex(sentinel);
        compiled.as_ref()
    };

    match re {
        Some(re) => re.replace_all(text, regex::NoExpand(literal)),
        None => {
            warn!("Could not build matcher for sentinel {:?}, leaving text as is", sentinel);
            Cow::Borrowed(text)
        }
    }
}

/// Build a whole-word matcher for a literal token
///
/// **Private** - internal helper for replace_sentinel
fn token_regex(token: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(token));
    Regex::new(&pattern).ok()
}

/// Convenience wrapper using the default null vocabulary
pub fn split_response(entry: &str, marker: &str) -> Result<String, ExtractError> {
    split_segment(entry, marker, NULL_SENTINEL, NULL_LITERAL)
}
