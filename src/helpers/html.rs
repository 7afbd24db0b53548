//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Generate an anchor tag; the link text is escaped
///
/// # Examples
/// ```ignore
/// link_to(&config, "/category/css/", "CSS") // -> <a href="/category/css/">CSS</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            html_escape(path),
            html_escape(text)
        )
    } else {
        format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(&url_for(config, path)),
            html_escape(text)
        )
    }
}

/// Generate the generator meta tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="blogcat {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to at most `length` characters, omission included
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
