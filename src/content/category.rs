//! The fixed set of categories a post can belong to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A post category.
///
/// The set is closed: every category the site can render is listed in
/// [`Category::ALL`], and front matter naming anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    JavaScript,
    TypeScript,
    React,
    Next,
    SvelteKit,
    Css,
    Html,
    Node,
    Git,
}

/// Key and display name for every category, in listing order
const TABLE: &[(Category, &str, &str)] = &[
    (Category::JavaScript, "javascript", "JavaScript"),
    (Category::TypeScript, "typescript", "TypeScript"),
    (Category::React, "react", "React"),
    (Category::Next, "next", "Next.js"),
    (Category::SvelteKit, "sveltekit", "SvelteKit"),
    (Category::Css, "css", "CSS"),
    (Category::Html, "html", "HTML"),
    (Category::Node, "node", "Node.js"),
    (Category::Git, "git", "Git"),
];

impl Category {
    /// All categories in listing order
    pub const ALL: [Category; 9] = [
        Category::JavaScript,
        Category::TypeScript,
        Category::React,
        Category::Next,
        Category::SvelteKit,
        Category::Css,
        Category::Html,
        Category::Node,
        Category::Git,
    ];

    fn entry(self) -> &'static (Category, &'static str, &'static str) {
        // TABLE covers every variant, checked by `test_table_covers_all_variants`
        &TABLE[self as usize]
    }

    /// The key used in front matter and output paths (e.g. `next`)
    pub fn key(self) -> &'static str {
        self.entry().1
    }

    /// Human-friendly label (e.g. `Next.js`)
    pub fn display_name(self) -> &'static str {
        self.entry().2
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        TABLE
            .iter()
            .find(|(_, k, _)| *k == key)
            .map(|(c, _, _)| *c)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_variants() {
        assert_eq!(TABLE.len(), Category::ALL.len());
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(TABLE[i].0, *category);
            assert_eq!(category.entry().0, *category);
        }
    }

    #[test]
    fn test_parse_category_key() {
        assert_eq!("next".parse::<Category>().unwrap(), Category::Next);
        assert_eq!("CSS".parse::<Category>().unwrap(), Category::Css);
        assert_eq!(" sveltekit ".parse::<Category>().unwrap(), Category::SvelteKit);
        assert!("cobol".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Css.display_name(), "CSS");
        assert_eq!(Category::Next.display_name(), "Next.js");
        assert_eq!(Category::SvelteKit.key(), "sveltekit");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::SvelteKit).unwrap();
        assert_eq!(json, "\"sveltekit\"");
        let back: Category = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(back, Category::JavaScript);
    }
}
