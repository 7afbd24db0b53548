//! Render contract - turns a bound category page into an output file

mod html;
mod json;

use anyhow::Result;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::config::{OutputFormat, SiteConfig};
use crate::pages::CategoryPage;

/// A consumer of category page payloads.
///
/// Implementations must be `Sync`: the generator renders categories in
/// parallel through a shared reference.
pub trait PageRenderer: Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// File written inside each category's output directory
    fn file_name(&self) -> &'static str;

    /// Render one category page
    fn render(&self, page: &CategoryPage<'_>) -> Result<String>;
}

/// Build the renderers for the configured output formats
pub fn renderers(config: &SiteConfig) -> Vec<Box<dyn PageRenderer>> {
    config
        .formats
        .iter()
        .map(|format| -> Box<dyn PageRenderer> {
            match format {
                OutputFormat::Json if config.compact_json => Box::new(JsonRenderer::compact()),
                OutputFormat::Json => Box::new(JsonRenderer::new()),
                OutputFormat::Html => Box::new(HtmlRenderer::new(config.clone())),
            }
        })
        .collect()
}
