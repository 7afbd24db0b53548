//! Date helper functions

use chrono::{Datelike, NaiveDateTime};

/// Moment.js tokens and their chrono equivalents, longest first so `MMMM`
/// is not read as `MM` twice. `None` is the ordinal day (`Do`).
const TOKENS: &[(&str, Option<&str>)] = &[
    ("YYYY", Some("%Y")),
    ("MMMM", Some("%B")),
    ("dddd", Some("%A")),
    ("DDDD", Some("%j")),
    ("MMM", Some("%b")),
    ("ddd", Some("%a")),
    ("YY", Some("%y")),
    ("MM", Some("%m")),
    ("DD", Some("%d")),
    ("Do", None),
    ("HH", Some("%H")),
    ("hh", Some("%I")),
    ("mm", Some("%M")),
    ("ss", Some("%S")),
    ("M", Some("%-m")),
    ("D", Some("%-d")),
    ("H", Some("%-H")),
    ("A", Some("%p")),
];

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// format_date(&date, "MMMM Do") // -> "January 15th"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let mut result = String::with_capacity(format.len() + 8);
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        match TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, spec)) => {
                match spec {
                    Some(spec) => result.push_str(&date.format(spec).to_string()),
                    None => result.push_str(&ordinal(date.day())),
                }
                rest = &rest[token.len()..];
            }
            None => {
                result.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    result
}

/// Format a date as an ISO 8601 timestamp (for `datetime` attributes)
pub fn date_xml(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDateTime, format: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date_xml(date),
        format_date(date, format)
    )
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date(), "YYYY/MM/DD"), "2024/01/15");
        assert_eq!(format_date(&date(), "MMM DD, YYYY"), "Jan 15, 2024");
        assert_eq!(format_date(&date(), "MMMM YYYY"), "January 2024");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag(&date(), "YYYY-MM-DD"),
            r#"<time datetime="2024-01-15T10:30:00">2024-01-15</time>"#
        );
    }

    #[test]
    fn test_format_day_names_and_ordinals() {
        assert_eq!(format_date(&date(), "dddd, MMMM Do YYYY"), "Monday, January 15th 2024");
        assert_eq!(format_date(&date(), "ddd D/M HH:mm:ss"), "Mon 15/1 10:30:00");
        assert_eq!(format_date(&date(), "100%"), "100%");
    }

    #[test]
    fn test_ordinal() {
        let got: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .iter()
            .map(|n| ordinal(*n))
            .collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "31st"]
        );
    }
}
