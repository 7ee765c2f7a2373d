//! Naive CSV reader for uploaded review exports.
//!
//! Only the `review_text` column is read. Values are split on every comma
//! (quoted commas are not supported) and one pair of surrounding quotes is
//! stripped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AnalysisError, REVIEW_COLUMN};

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").expect("valid line regex"));

/// Extract lowercased review strings from a CSV blob.
///
/// An input with no non-empty lines yields no reviews. A header row without
/// `review_text` is an error. Rows shorter than the header contribute an
/// empty review.
pub fn parse_review_csv(text: &str) -> Result<Vec<String>, AnalysisError> {
    let mut rows = LINE_BREAK.split(text).filter(|row| !row.is_empty());

    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };

    let review_idx = header
        .split(',')
        .map(str::trim)
        .position(|h| h == REVIEW_COLUMN)
        .ok_or_else(AnalysisError::missing_review_column)?;

    Ok(rows
        .map(|row| {
            let value = row.split(',').nth(review_idx).unwrap_or("");
            strip_quotes(value).to_lowercase()
        })
        .collect())
}

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted_review() {
        let reviews = parse_review_csv("review_text\nburns my skin\"").unwrap();
        assert_eq!(reviews, vec!["burns my skin"]);
    }

    #[test]
    fn test_column_position_and_lowercase() {
        let csv = "id, rating , review_text\r\n1,5,\"LOVE IT\"\r\n2,1,Sticky Mess\r\n";
        let reviews = parse_review_csv(csv).unwrap();
        assert_eq!(reviews, vec!["love it", "sticky mess"]);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_review_csv("id,comment\n1,great").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn { column: "review_text" }));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_review_csv("").unwrap().is_empty());
        assert!(parse_review_csv("\n\n").unwrap().is_empty());
        assert!(parse_review_csv("review_text\n").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let reviews = parse_review_csv("review_text\n\nfirst\n\nsecond").unwrap();
        assert_eq!(reviews, vec!["first", "second"]);
    }

    #[test]
    fn test_short_row_gives_empty_review() {
        let reviews = parse_review_csv("id,review_text\n42").unwrap();
        assert_eq!(reviews, vec![""]);
    }

    #[test]
    fn test_quoted_comma_is_split() {
        let reviews = parse_review_csv("review_text,id\n\"cheap, but leaks\",7").unwrap();
        assert_eq!(reviews, vec!["cheap"]);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("a\"b"), "a\"b");
        assert_eq!(strip_quotes("\"\"x\"\""), "\"x\"");
    }
}
