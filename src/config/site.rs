//! Site configuration (_config.yml)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An output format for category pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The raw `{ category, posts, title }` payload
    Json,
    /// A built-in listing page
    Html,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub category_dir: String,
    pub post_dir: String,

    // Writing
    pub date_format: String,

    // Output
    pub formats: Vec<OutputFormat>,
    /// Write JSON payloads without whitespace
    pub compact_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "blogcat".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            category_dir: "category".to_string(),
            post_dir: "posts".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            formats: vec![OutputFormat::Json, OutputFormat::Html],
            compact_json: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the generator cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.formats.is_empty() {
            bail!("Config validation error: `formats` must name at least one output format");
        }
        for (name, dir) in [
            ("content_dir", &self.content_dir),
            ("public_dir", &self.public_dir),
        ] {
            if dir.trim().is_empty() {
                bail!("Config validation error: `{}` must not be empty", name);
            }
        }
        if self.category_dir.trim_matches('/') == self.post_dir.trim_matches('/') {
            bail!("Config validation error: `category_dir` and `post_dir` must differ");
        }
        Ok(())
    }
}
