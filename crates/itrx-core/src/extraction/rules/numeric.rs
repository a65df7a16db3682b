//! Numeric token extraction.

use super::patterns::NUMERIC_TOKEN;

/// Find the first numeric token in a line.
///
/// Tokens are not parsed into numbers: internal spaces are kept, and a lone
/// single digit is not a token.
pub fn find_numeric_value(line: &str) -> Option<String> {
    NUMERIC_TOKEN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
