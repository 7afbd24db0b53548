//! Built-in HTML renderer

use anyhow::Result;
use std::fmt::Write;

use super::PageRenderer;
use crate::config::SiteConfig;
use crate::content::{Category, ContentStore, MarkdownRenderer, Post};
use crate::helpers::{
    category_path, full_url_for, html_escape, link_to, meta_generator, post_path, time_tag,
    truncate,
};
use crate::pages::CategoryPage;

/// Length of the summary shown when a post has no description
const SUMMARY_CHARS: usize = 160;

/// Renders category listings and post pages as plain HTML documents
pub struct HtmlRenderer {
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl HtmlRenderer {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            markdown: MarkdownRenderer::with_demoted_headings(),
        }
    }

    /// Render a single post page
    pub fn render_post(&self, post: &Post) -> Result<String> {
        let mut body = String::new();
        writeln!(body, "<article class=\"post\">")?;
        writeln!(body, "<h1>{}</h1>", html_escape(&post.title))?;
        writeln!(body, "<p class=\"post-meta\">{}</p>", self.post_meta(post))?;
        writeln!(body, "{}", self.markdown.render(&post.content))?;
        writeln!(body, "</article>")?;
        self.layout(&post.title, &post_path(&self.config, post), &body)
    }

    /// Render the site index: every category with its post count
    pub fn render_index(&self, store: &ContentStore) -> Result<String> {
        let mut body = String::new();
        writeln!(body, "<h1>{}</h1>", html_escape(&self.config.title))?;
        writeln!(body, "<ul class=\"category-list\">")?;
        for (category, count) in store.category_counts() {
            writeln!(
                body,
                "<li class=\"category-list-item\">{}<span class=\"category-list-count\">{}</span></li>",
                link_to(&self.config, &category_path(&self.config, category.key()), category.display_name()),
                count
            )?;
        }
        writeln!(body, "</ul>")?;
        self.layout(&self.config.title, "", &body)
    }

    fn post_meta(&self, post: &Post) -> String {
        let mut meta = String::new();
        if let Some(date) = &post.published {
            meta.push_str(&time_tag(date, &self.config.date_format));
            meta.push_str(" · ");
        }
        meta.push_str(&link_to(
            &self.config,
            &category_path(&self.config, post.category.key()),
            post.category.display_name(),
        ));
        meta
    }

    fn summary(&self, post: &Post) -> String {
        match &post.description {
            Some(description) => description.clone(),
            None => {
                let text = self.markdown.plain_text(&post.content);
                let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                truncate(&text, SUMMARY_CHARS, None)
            }
        }
    }

    /// Wrap `body` in the page skeleton; `path` is the page's directory
    /// relative to the site root, used for the canonical URL
    fn layout(&self, title: &str, path: &str, body: &str) -> Result<String> {
        let page_title = if title == self.config.title {
            html_escape(title)
        } else {
            format!(
                "{} | {}",
                html_escape(title),
                html_escape(&self.config.title)
            )
        };

        let mut nav = String::new();
        for category in Category::ALL {
            write!(
                nav,
                "<li>{}</li>",
                link_to(&self.config, &category_path(&self.config, category.key()), category.display_name())
            )?;
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{generator}
<link rel="canonical" href="{canonical}">
<title>{page_title}</title>
</head>
<body>
<nav><ul class="nav">{nav}</ul></nav>
<main>
{body}</main>
<footer>&copy; {author}</footer>
</body>
</html>
"#,
            lang = html_escape(&self.config.language),
            generator = meta_generator(),
            canonical = html_escape(&full_url_for(&self.config, path)),
            page_title = page_title,
            nav = nav,
            body = body,
            author = html_escape(&self.config.author),
        ))
    }
}

impl PageRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn file_name(&self) -> &'static str {
        "index.html"
    }

    fn render(&self, page: &CategoryPage<'_>) -> Result<String> {
        let mut body = String::new();
        writeln!(body, "<h1>{}</h1>", html_escape(page.category))?;

        if page.is_empty() {
            writeln!(body, "<p class=\"empty\">No posts yet.</p>")?;
        } else {
            writeln!(body, "<ul class=\"post-list\">")?;
            for post in &page.posts {
                writeln!(body, "<li class=\"post-list-item\">")?;
                writeln!(
                    body,
                    "<h2>{}</h2>",
                    link_to(&self.config, &post_path(&self.config, post), &post.title)
                )?;
                if let Some(date) = &post.published {
                    writeln!(body, "{}", time_tag(date, &self.config.date_format))?;
                }
                writeln!(body, "<p>{}</p>", html_escape(&self.summary(post)))?;
                writeln!(body, "</li>")?;
            }
            writeln!(body, "</ul>")?;
        }

        self.layout(page.title, &category_path(&self.config, page.key), &body)
    }
}
