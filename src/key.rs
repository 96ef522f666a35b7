//! Sort-key extraction and comparison.
//!
//! Each cell contributes one key per sort: the value of its
//! `sortable-data` attribute when present, otherwise its visible text.
//! A key is either a finite number or a case-folded string, decided by a
//! parse rule, and the two kinds have a documented total order instead of
//! the coercion-dependent ordering loose comparisons would produce.

use std::cmp::Ordering;

/// A typed sort key for a single cell.
///
/// Ordering rules:
/// - `Number` always sorts before `Text`.
/// - Numbers compare via [`f64::total_cmp`]. Only finite values are
///   constructed by [`SortKey::parse`].
/// - Text compares by byte order over the ASCII-lowercased string, so
///   comparison is case-insensitive but not locale-aware.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// The raw value parsed as a finite number.
    Number(f64),
    /// The raw value, ASCII-lowercased.
    Text(String),
}

impl SortKey {
    /// Build a key from a raw cell value.
    ///
    /// The value is treated as numeric when it trims to a string that
    /// parses as a finite `f64` ("10", " 2 ", "1e3", "-0.5"). Everything
    /// else, including the empty string, "nan" and "inf", becomes text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw.to_ascii_lowercase()),
        }
    }

    /// Build the key for a cell from its `sortable-data` attribute (if
    /// any) and its text content.
    #[must_use]
    pub fn for_cell(sortable_data: Option<&str>, text: &str) -> Self {
        match sortable_data {
            Some(raw) => Self::parse(raw),
            None => Self::parse(text),
        }
    }

    /// True if the key parsed as a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert!(SortKey::parse("10").is_number());
        assert!(SortKey::parse(" 2 ").is_number());
        assert!(SortKey::parse("-0.5").is_number());
        assert!(SortKey::parse("1e3").is_number());
    }

    #[test]
    fn test_parse_text() {
        assert!(!SortKey::parse("").is_number());
        assert!(!SortKey::parse("readme.txt").is_number());
        assert!(!SortKey::parse("nan").is_number());
        assert!(!SortKey::parse("inf").is_number());
        assert!(!SortKey::parse("10 files").is_number());
    }

    #[test]
    fn test_text_is_case_folded() {
        assert_eq!(SortKey::parse("Makefile"), SortKey::parse("makefile"));
        assert!(SortKey::parse("ALPHA") < SortKey::parse("beta"));
    }

    #[test]
    fn test_numbers_sort_numerically() {
        assert!(SortKey::parse("2") < SortKey::parse("9"));
        assert!(SortKey::parse("9") < SortKey::parse("10"));
    }

    #[test]
    fn test_numbers_sort_before_text() {
        assert!(SortKey::parse("999999") < SortKey::parse("aaa"));
        assert!(SortKey::parse("-1") < SortKey::parse(""));
    }

    #[test]
    fn test_for_cell_prefers_attribute() {
        let key = SortKey::for_cell(Some("1024"), "1 KiB");
        assert_eq!(key, SortKey::Number(1024.0));

        let key = SortKey::for_cell(None, "1 KiB");
        assert_eq!(key, SortKey::Text("1 kib".to_string()));
    }
}
