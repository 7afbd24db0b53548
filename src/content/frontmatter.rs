//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use super::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Raw metadata header of a content document.
///
/// Every field is optional here; required fields are enforced when the
/// header is turned into a [`Post`](super::Post).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "date")]
    pub published: Option<String>,
    pub updated: Option<String>,
    pub draft: bool,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content)
    ///
    /// Accepted headers: YAML fenced by `---`, TOML fenced by `+++`, JSON
    /// fenced by `;;;`, or a bare JSON object at the top of the file.
    pub fn parse<'a>(path: &Path, content: &'a str) -> Result<(Self, &'a str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if let Some((header, body)) = split_fenced(content, "---") {
            return Self::parse_yaml(path, header).map(|fm| (fm, body));
        }
        if let Some((header, body)) = split_fenced(content, "+++") {
            return Self::parse_toml(path, header).map(|fm| (fm, body));
        }
        if let Some((header, body)) = split_fenced(content, ";;;") {
            return Self::parse_json(path, header).map(|fm| (fm, body));
        }
        if content.starts_with('{') {
            return Self::parse_json_object(path, content);
        }

        if ["---", "+++", ";;;"].iter().any(|f| content.starts_with(f)) {
            return Err(malformed(path, "front-matter is never closed"));
        }

        Err(ContentError::MissingFrontMatter {
            path: path.to_path_buf(),
        })
    }

    fn parse_yaml(path: &Path, header: &str) -> Result<Self, ContentError> {
        if header.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(header).map_err(|e| malformed(path, e))
    }

    fn parse_toml(path: &Path, header: &str) -> Result<Self, ContentError> {
        let table: toml::Table = header.parse().map_err(|e| malformed(path, e))?;

        // TOML has a native datetime type; dates are kept as strings so they
        // go through the same parser as the other formats
        let table = table
            .into_iter()
            .map(|(key, value)| match value {
                toml::Value::Datetime(dt) => (key, toml::Value::String(dt.to_string())),
                other => (key, other),
            })
            .collect::<toml::Table>();

        toml::Value::Table(table)
            .try_into()
            .map_err(|e| malformed(path, e))
    }

    fn parse_json(path: &Path, header: &str) -> Result<Self, ContentError> {
        serde_json::from_str(header).map_err(|e| malformed(path, e))
    }

    fn parse_json_object<'a>(
        path: &Path,
        content: &'a str,
    ) -> Result<(Self, &'a str), ContentError> {
        let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
        match stream.next() {
            Some(Ok(fm)) => {
                let remaining = content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                Ok((fm, remaining))
            }
            Some(Err(e)) => Err(malformed(path, e)),
            None => Err(malformed(path, "empty JSON front-matter")),
        }
    }
}

fn malformed(path: &Path, message: impl ToString) -> ContentError {
    ContentError::Malformed {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Split `content` into (header, body) when it opens with a `fence` line
/// and a matching closing line exists
fn split_fenced<'a>(content: &'a str, fence: &str) -> Option<(&'a str, &'a str)> {
    let rest = content.strip_prefix(fence)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == fence {
            let header = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with an offset, normalized to UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<(FrontMatter, &str), ContentError> {
        FrontMatter::parse(Path::new("test.md"), content)
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
slug: hello-world
category: next
published: 2023-09-08
tags:
  - routing
  - app-dir
---

This is the content.
"#;

        let (fm, remaining) = parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.slug, Some("hello-world".to_string()));
        assert_eq!(fm.category, Some("next".to_string()));
        assert_eq!(fm.published, Some("2023-09-08".to_string()));
        assert_eq!(fm.tags, vec!["routing", "app-dir"]);
        assert!(!fm.draft);
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_date_alias() {
        let content = "---\ntitle: Old style\ndate: 2024-01-15 10:30:00\n---\nbody";
        let (fm, _) = parse(content).unwrap();
        assert_eq!(fm.published, Some("2024-01-15 10:30:00".to_string()));
    }

    #[test]
    fn test_parse_toml_frontmatter() {
        let content = r#"+++
title = "Grid Tricks"
category = "css"
published = 2024-02-01
draft = true
tags = "layout"
+++
Body text.
"#;

        let (fm, remaining) = parse(content).unwrap();
        assert_eq!(fm.title, Some("Grid Tricks".to_string()));
        assert_eq!(fm.published, Some("2024-02-01".to_string()));
        assert!(fm.draft);
        assert_eq!(fm.tags, vec!["layout"]);
        assert_eq!(remaining, "Body text.\n");
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test Post", "category": "react", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = parse(content).unwrap();
        assert_eq!(fm.title, Some("Test Post".to_string()));
        assert_eq!(fm.tags, vec!["a", "b"]);
        assert!(remaining.starts_with("This is content."));
    }

    #[test]
    fn test_parse_fenced_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\", \"description\": \"a {brace} inside\"}\n;;;\nBody";
        let (fm, remaining) = parse(content).unwrap();
        assert_eq!(fm.title, Some("Fenced".to_string()));
        assert_eq!(fm.description, Some("a {brace} inside".to_string()));
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_missing_frontmatter_is_an_error() {
        let err = parse("# Just a heading\n\nNo header here.").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontMatter { .. }));
    }

    #[test]
    fn test_unclosed_frontmatter_is_an_error() {
        let err = parse("---\ntitle: Never closed\n\nBody").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { .. }));
    }

    #[test]
    fn test_wrong_value_type_is_an_error() {
        let err = parse("---\ntitle: Bad draft\ndraft: maybe\n---\n").unwrap_err();
        assert!(err.is_malformed_metadata());
    }

    #[test]
    fn test_body_horizontal_rule_is_kept() {
        let content = "---\ntitle: Rules\n---\nabove\n\n---\n\nbelow\n";
        let (_, remaining) = parse(content).unwrap();
        assert!(remaining.contains("above"));
        assert!(remaining.contains("below"));
    }

    #[test]
    fn test_parse_date_string() {
        let dt = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        let d = parse_date_string("2023/09/08").unwrap();
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2023-09-08");

        let rfc = parse_date_string("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(rfc.format("%H:%M").to_string(), "10:00");

        assert!(parse_date_string("next tuesday").is_none());
        assert!(parse_date_string("2023-13-40").is_none());
    }
}
