//! blogcat: a static blog generator organized by category
//!
//! Markdown posts with front matter are loaded once into an immutable
//! [`content::ContentStore`]; every category is then bound to a
//! `{ category, posts, title }` payload ([`pages::CategoryPage`]) and handed
//! to the configured renderers.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod render;

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The main application
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content (source) directory
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        check_public_dir(&base_dir, &content_dir, &public_dir)?;

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Load the content store
    pub fn load_content(&self) -> Result<content::ContentStore> {
        Ok(content::ContentStore::load(&self.content_dir)?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<generator::GenerateStats> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post, as a draft unless `publish` is set
    pub fn new_post(
        &self,
        title: &str,
        category: content::Category,
        publish: bool,
    ) -> Result<std::path::PathBuf> {
        commands::new::create_post(self, title, category, publish)
    }
}

/// Every build and every `clean` deletes the public dir, so it must not hold
/// the site itself or overlap the sources
fn check_public_dir(base_dir: &Path, content_dir: &Path, public_dir: &Path) -> Result<()> {
    let base = normalize(base_dir)?;
    let content = normalize(content_dir)?;
    let public = normalize(public_dir)?;

    if base.starts_with(&public) {
        bail!(
            "Config validation error: `public_dir` {:?} must be a subdirectory of the site, not contain it",
            public_dir
        );
    }
    if public.starts_with(&content) || content.starts_with(&public) {
        bail!(
            "Config validation error: `public_dir` {:?} and `content_dir` {:?} must not overlap",
            public_dir,
            content_dir
        );
    }
    Ok(())
}

/// Absolute, lexically normalized form of `path` (the path need not exist)
fn normalize(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
