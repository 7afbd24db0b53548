//! Generator module - binds every category page and writes the rendered output

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{OutputFormat, SiteConfig};
use crate::content::{sorted_posts, ContentStore};
use crate::helpers::{category_path, category_url, post_path};
use crate::pages::{self, CategoryPage};
use crate::render::{self, HtmlRenderer, PageRenderer};
use crate::Site;

/// Summary of a finished build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub categories: usize,
    pub posts: usize,
    pub files: usize,
}

/// Entry of `categories.json`
#[derive(Debug, Serialize)]
struct CategorySummary {
    key: &'static str,
    name: &'static str,
    path: String,
    count: usize,
}

/// Static site generator
pub struct Generator {
    config: SiteConfig,
    public_dir: PathBuf,
    renderers: Vec<Box<dyn PageRenderer>>,
    html: Option<HtmlRenderer>,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        let config = site.config.clone();
        let html = config
            .formats
            .contains(&OutputFormat::Html)
            .then(|| HtmlRenderer::new(config.clone()));

        Self {
            renderers: render::renderers(&config),
            config,
            public_dir: site.public_dir.clone(),
            html,
        }
    }

    /// Generate the entire site.
    ///
    /// Output is written to a staging directory that replaces the public
    /// directory only once every page has been written, so a failed build
    /// leaves the previous output untouched.
    pub fn generate(&self, store: &ContentStore) -> Result<GenerateStats> {
        let staging = staging_dir(&self.public_dir);
        if staging.exists() {
            fs::remove_dir_all(&staging)
                .with_context(|| format!("Failed to remove stale {:?}", staging))?;
        }
        fs::create_dir_all(&staging).with_context(|| format!("Failed to create {:?}", staging))?;

        match self.generate_into(store, &staging) {
            Ok(stats) => {
                if self.public_dir.exists() {
                    fs::remove_dir_all(&self.public_dir)
                        .with_context(|| format!("Failed to replace {:?}", self.public_dir))?;
                }
                fs::rename(&staging, &self.public_dir).with_context(|| {
                    format!("Failed to move {:?} to {:?}", staging, self.public_dir)
                })?;
                Ok(stats)
            }
            Err(e) => {
                if let Err(cleanup) = fs::remove_dir_all(&staging) {
                    tracing::warn!("Failed to remove {:?}: {}", staging, cleanup);
                }
                Err(e)
            }
        }
    }

    fn generate_into(&self, store: &ContentStore, out_dir: &Path) -> Result<GenerateStats> {
        let files = AtomicUsize::new(0);

        // Generate category pages
        let category_pages = pages::bind_all(store);
        category_pages
            .par_iter()
            .try_for_each(|page| self.generate_category_page(page, out_dir, &files))?;

        // Generate post pages
        let posts = sorted_posts(store.listed());
        if let Some(html) = &self.html {
            posts.par_iter().try_for_each(|post| -> Result<()> {
                let out = out_dir.join(post_path(&self.config, post)).join("index.html");
                write_file(&out, &html.render_post(post)?)?;
                files.fetch_add(1, Ordering::Relaxed);
                Ok(())
            })?;

            write_file(&out_dir.join("index.html"), &html.render_index(store)?)?;
            files.fetch_add(1, Ordering::Relaxed);
        }

        // Generate category index
        self.generate_category_index(store, out_dir)?;
        files.fetch_add(1, Ordering::Relaxed);

        Ok(GenerateStats {
            categories: category_pages.len(),
            posts: posts.len(),
            files: files.into_inner(),
        })
    }

    fn generate_category_page(
        &self,
        page: &CategoryPage<'_>,
        out_dir: &Path,
        files: &AtomicUsize,
    ) -> Result<()> {
        let dir = out_dir.join(category_path(&self.config, page.key));

        for renderer in &self.renderers {
            let output = renderer
                .render(page)
                .with_context(|| format!("Failed to render {} page `{}`", renderer.name(), page.key))?;
            write_file(&dir.join(renderer.file_name()), &output)?;
            files.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!("Generated category `{}` ({} posts)", page.key, page.posts.len());
        Ok(())
    }

    /// Write `categories.json`: every category with its URL and post count
    fn generate_category_index(&self, store: &ContentStore, out_dir: &Path) -> Result<()> {
        let summaries: Vec<CategorySummary> = store
            .category_counts()
            .into_iter()
            .map(|(category, count)| CategorySummary {
                key: category.key(),
                name: category.display_name(),
                path: category_url(&self.config, category),
                count,
            })
            .collect();

        let json = serde_json::to_string_pretty(&summaries)?;
        write_file(&out_dir.join("categories.json"), &json)
    }
}

/// Sibling directory the build is written to before it replaces `public_dir`
pub fn staging_dir(public_dir: &Path) -> PathBuf {
    let name = public_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("public");
    public_dir.with_file_name(format!(".{}.staging", name))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Generated: {:?}", path);
    Ok(())
}
