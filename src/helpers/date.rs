//! Date helper functions

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Format an ISO `YYYY-MM-DD` date using a Moment.js-compatible format string
///
/// Dates that do not parse, or that the format cannot render, are returned
/// unchanged.
///
/// # Examples
/// ```ignore
/// display_date("2024-01-15", "MMMM D, YYYY") // -> "January 15, 2024"
/// ```
pub fn display_date(date: &str, format: &str) -> String {
    parse_date(date)
        .and_then(|parsed| format_date(&parsed, format))
        .unwrap_or_else(|| date.to_string())
}

/// Parse an ISO date, tolerating a trailing time component
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    let day = date.split('T').next().unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Format a date using Moment.js-compatible format string
///
/// Returns `None` when the format has items a calendar date cannot render.
pub fn format_date(date: &NaiveDate, format: &str) -> Option<String> {
    let chrono_format = moment_to_chrono_format(format);
    let items: Vec<Item> = StrftimeItems::new(&chrono_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items.iter())).ok()?;
    Some(out)
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest tokens first within each family
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    // Literal `%` must not start a chrono specifier
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-15", "YYYY/MM/DD"), "2024/01/15");
        assert_eq!(display_date("2024-01-01", "MMMM D, YYYY"), "January 1, 2024");
        assert_eq!(display_date("2024-03-05T10:00:00Z", "DD MMM YY"), "05 Mar 24");
    }

    #[test]
    fn test_unparsable_date_is_verbatim() {
        assert_eq!(display_date("someday", "YYYY-MM-DD"), "someday");
        assert_eq!(display_date("", "YYYY-MM-DD"), "");
    }

    #[test]
    fn test_literal_percent_in_format() {
        assert_eq!(display_date("2024-01-01", "D MMMM YYYY (100%)"), "1 January 2024 (100%)");
        assert_eq!(display_date("2024-01-05", "%D"), "%5");
        assert_eq!(moment_to_chrono_format("50%"), "50%%");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(&date, "YYYY").as_deref(), Some("2024"));
        assert_eq!(format_date(&date, "MMMM D"), Some("January 1".to_string()));
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("dddd, MMMM D"), "%A, %B %-d");
    }
}
