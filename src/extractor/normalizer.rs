//! Escape normalization for extracted regions.

/// Ordered literal substitutions. Quote un-escaping runs before backslash
/// un-escaping so a backslash left over from `\\"` is not re-read.
const ESCAPE_RULES: [(&str, &str); 3] = [("\\\"", "\""), ("\\'", "'"), ("\\\\", "\\")];

/// Convert escaped quotes and backslashes into their literal characters
///
/// Text without any backslash is returned unchanged.
pub fn normalize_escapes(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    ESCAPE_RULES
        .iter()
        .fold(raw.to_string(), |text, &(from, to)| text.replace(from, to))
}
