//! Balanced-region scanner.
//!
//! Locates a marker inside a trace entry and finds the brace-delimited
//! region that follows it. Braces inside double-quoted strings do not count,
//! and a backslash exempts the next character from every rule.

use crate::utils::error::ExtractError;
use log::debug;

/// Character-level scan mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Outside any string literal; braces are counted
    Normal,
    /// Inside a double-quoted string; braces are ignored
    InString,
    /// Previous character was a backslash. The flag records which mode
    /// to return to once the escaped character is consumed.
    Escaped { in_string: bool },
}

/// Structural brace seen in `Normal` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    Open,
    Close,
}

impl ScanMode {
    /// Transition table of the scanner.
    ///
    /// Returns the next mode and the brace event (if any) the character
    /// produces. Only `Normal` mode emits brace events.
    pub fn step(self, ch: char) -> (ScanMode, Option<Brace>) {
        match (self, ch) {
            (ScanMode::Escaped { in_string: true }, _) => (ScanMode::InString, None),
            (ScanMode::Escaped { in_string: false }, _) => (ScanMode::Normal, None),
            (ScanMode::Normal, '\\') => (ScanMode::Escaped { in_string: false }, None),
            (ScanMode::InString, '\\') => (ScanMode::Escaped { in_string: true }, None),
            (ScanMode::Normal, '"') => (ScanMode::InString, None),
            (ScanMode::InString, '"') => (ScanMode::Normal, None),
            (ScanMode::Normal, '{') => (ScanMode::Normal, Some(Brace::Open)),
            (ScanMode::Normal, '}') => (ScanMode::Normal, Some(Brace::Close)),
            (mode, _) => (mode, None),
        }
    }
}

/// Byte range of a balanced region (`end` is exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Borrow the region out of the text it was scanned from
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Find the balanced region following the first occurrence of `marker`
///
/// **Public** - main entry point of the scanner
///
/// # Arguments
/// * `text` - Full trace entry
/// * `marker` - Literal substring after which scanning starts
///
/// # Returns
/// The region from the first structural `{` after the marker up to and
/// including its matching `}`
///
/// # Errors
/// * `ExtractError::MarkerNotFound` - Marker absent from the entry
/// * `ExtractError::NoRegion` - No structural `{` after the marker
/// * `ExtractError::UnbalancedDelimiters` - Text ended before depth returned to zero
pub fn scan_region(text: &str, marker: &str) -> Result<Region, ExtractError> {
    let marker_at = text
        .find(marker)
        .ok_or_else(|| ExtractError::MarkerNotFound(marker.to_string()))?;

    scan_from(text, marker_at + marker.len())
}

/// End offset (exclusive) of the balanced region after `marker`
pub fn find_region_end(text: &str, marker: &str) -> Result<usize, ExtractError> {
    scan_region(text, marker).map(|region| region.end)
}

/// Single left-to-right pass starting at `cursor`
///
/// **Private** - internal helper for scan_region
fn scan_from(text: &str, cursor: usize) -> Result<Region, ExtractError> {
    let mut mode = ScanMode::Normal;
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (offset, ch) in text[cursor..].char_indices() {
        let (next, brace) = mode.step(ch);
        mode = next;

        match brace {
            Some(Brace::Open) => {
                if depth == 0 {
                    start.get_or_insert(cursor + offset);
                }
                depth += 1;
            }
            // Stray closers before the region opens are ignored
            Some(Brace::Close) if depth > 0 => {
                depth -= 1;
                if let (0, Some(start)) = (depth, start) {
                    let end = cursor + offset + ch.len_utf8();
                    debug!("Balanced region found at {}..{}", start, end);
                    return Ok(Region { start, end });
                }
            }
            _ => {}
        }
    }

    match start {
        None => Err(ExtractError::NoRegion),
        Some(_) => Err(ExtractError::UnbalancedDelimiters { depth }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MARKER: &str = "'agent_plan': '";

    fn extract(text: &str) -> Result<&str, ExtractError> {
        scan_region(text, MARKER).map(|region| region.slice(text))
    }

    #[test]
    fn test_simple_region() {
        let text = r#"{ 'response': { 'agent_plan': '{"content_format": "X"}'} }"#;
        assert_eq!(extract(text).unwrap(), r#"{"content_format": "X"}"#);
    }

    #[test]
    fn test_nested_region() {
        let text = r#"'agent_plan': '{"a": {"b": {"c": 1}}, "d": 2}' trailing }"#;
        assert_eq!(extract(text).unwrap(), r#"{"a": {"b": {"c": 1}}, "d": 2}"#);
    }

    #[test]
    fn test_braces_inside_string_ignored() {
        let text = r#"'agent_plan': '{"hook": "use } and { freely"}' }"#;
        assert_eq!(extract(text).unwrap(), r#"{"hook": "use } and { freely"}"#);
    }

    #[test]
    fn test_escaped_quote_keeps_string_open() {
        let text = r#"'agent_plan': '{"q": "say \"}\" now"}'"#;
        assert_eq!(extract(text).unwrap(), r#"{"q": "say \"}\" now"}"#);
    }

    #[test]
    fn test_escaped_brace_outside_string_not_counted() {
        let text = r#"'agent_plan': '{"a": 1 \} }'"#;
        assert_eq!(extract(text).unwrap(), r#"{"a": 1 \} }"#);
    }

    #[test]
    fn test_end_offset_is_exclusive() {
        let text = "'agent_plan': '{}' rest";
        let end = find_region_end(text, MARKER).unwrap();
        assert_eq!(&text[..end], "'agent_plan': '{}");
    }

    #[test]
    fn test_stray_closer_before_region() {
        let text = "'agent_plan': '} {x}'";
        let region = scan_region(text, MARKER).unwrap();
        assert_eq!(region, Region { start: 17, end: 20 });
        assert_eq!(region.slice(text), "{x}");
    }

    #[test]
    fn test_marker_missing() {
        let err = extract("no plan here {}").unwrap_err();
        assert_eq!(err, ExtractError::MarkerNotFound(MARKER.to_string()));
    }

    #[test]
    fn test_no_opening_brace() {
        assert_eq!(extract("'agent_plan': 'plain text'"), Err(ExtractError::NoRegion));
    }

    #[test]
    fn test_unbalanced_region() {
        assert_eq!(
            extract(r#"'agent_plan': '{"a": {"b": 1}"#),
            Err(ExtractError::UnbalancedDelimiters { depth: 1 })
        );
    }

    #[test]
    fn test_multibyte_text() {
        let text = "'agent_plan': '{\"emoji\": \"🚀 {\"}' ✓";
        assert_eq!(extract(text).unwrap(), "{\"emoji\": \"🚀 {\"}");
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(ScanMode::Normal.step('{'), (ScanMode::Normal, Some(Brace::Open)));
        assert_eq!(ScanMode::Normal.step('}'), (ScanMode::Normal, Some(Brace::Close)));
        assert_eq!(ScanMode::Normal.step('"'), (ScanMode::InString, None));
        assert_eq!(ScanMode::InString.step('{'), (ScanMode::InString, None));
        assert_eq!(ScanMode::InString.step('"'), (ScanMode::Normal, None));
        assert_eq!(
            ScanMode::InString.step('\\'),
            (ScanMode::Escaped { in_string: true }, None)
        );
        assert_eq!(
            ScanMode::Escaped { in_string: true }.step('"'),
            (ScanMode::InString, None)
        );
        assert_eq!(
            ScanMode::Escaped { in_string: false }.step('{'),
            (ScanMode::Normal, None)
        );
    }
}
