//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::{sorted_posts, ContentStore};
use crate::helpers::{category_url, post_url};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = site.load_content()?;
    print!("{}", render(site, &store, content_type)?);
    Ok(())
}

fn render(site: &Site, store: &ContentStore, content_type: &str) -> Result<String> {
    let config = &site.config;
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let posts = sorted_posts(store.listed());
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}] {}",
                    post.published
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                    post.title,
                    post.category.key(),
                    post_url(config, post)
                )?;
            }
        }
        "draft" | "drafts" => {
            let drafts = sorted_posts(store.drafts());
            writeln!(out, "Drafts ({}):", drafts.len())?;
            for post in drafts {
                writeln!(out, "  {} [{}]", post.title, post.source.display())?;
            }
        }
        "category" | "categories" => {
            let counts = store.category_counts();
            writeln!(out, "Categories ({}):", counts.len())?;
            for (category, count) in counts {
                writeln!(
                    out,
                    "  {} ({}) {}",
                    category.display_name(),
                    count,
                    category_url(config, category)
                )?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, draft, category",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, Post};
    use chrono::NaiveDate;

    fn store() -> ContentStore {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut draft = Post::new("Half Done", Category::Node, date);
        draft.draft = true;
        ContentStore::from_posts(vec![Post::new("Streams", Category::Node, date), draft]).unwrap()
    }

    #[test]
    fn test_list_posts() {
        let tmp = tempfile::TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let out = render(&site, &store(), "post").unwrap();
        assert_eq!(out, "Posts (1):\n  2024-03-09 - Streams [node] /posts/streams/\n");
    }

    #[test]
    fn test_list_drafts_and_categories() {
        let tmp = tempfile::TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let store = store();

        let drafts = render(&site, &store, "drafts").unwrap();
        assert!(drafts.starts_with("Drafts (1):"));
        assert!(drafts.contains("Half Done [half-done.md]"));

        let categories = render(&site, &store, "category").unwrap();
        assert!(categories.contains("  Node.js (1) /category/node/\n"));
        assert!(categories.contains("  CSS (0) /category/css/\n"));
    }

    #[test]
    fn test_list_unknown_type() {
        let tmp = tempfile::TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(render(&site, &store(), "tag").is_err());
    }
}
