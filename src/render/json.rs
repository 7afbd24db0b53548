//! JSON payload renderer

use anyhow::Result;

use super::PageRenderer;
use crate::pages::CategoryPage;

/// Writes the `{ category, posts, title }` payload as JSON, for an external
/// view layer to consume
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    compact: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }
}

impl PageRenderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn file_name(&self) -> &'static str {
        "index.json"
    }

    fn render(&self, page: &CategoryPage<'_>) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(page)?
        } else {
            serde_json::to_string_pretty(page)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, ContentStore, Post};
    use crate::pages::bind;

    #[test]
    fn test_render_payload() {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 9, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut post = Post::new("Parallel Routes", Category::Next, date);
        post.description = Some("Two pages, one layout".to_string());
        post.content = "# Body".to_string();
        let store = ContentStore::from_posts(vec![post]).unwrap();

        let out = JsonRenderer::compact()
            .render(&bind(&store, Category::Next))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["category"], "Next.js");
        assert_eq!(value["title"], "Next.js");
        let posts = value["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["slug"], "parallel-routes");
        assert_eq!(posts[0]["category"], "next");
        assert_eq!(posts[0]["published"], "2023-09-08T00:00:00");
        assert_eq!(posts[0]["draft"], false);
        assert_eq!(posts[0]["description"], "Two pages, one layout");
        assert_eq!(posts[0]["content"], "# Body");
        assert!(posts[0].get("source").is_none());
    }

    #[test]
    fn test_payload_key_order() {
        let store = ContentStore::default();
        let out = JsonRenderer::compact()
            .render(&bind(&store, Category::Css))
            .unwrap();
        assert_eq!(out, r#"{"category":"CSS","posts":[],"title":"CSS"}"#);
    }
}
