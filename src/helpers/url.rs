//! URL helper functions

use crate::config::SiteConfig;
use crate::content::{Category, Post};

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/category/css/") // -> "/blog/category/css/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Directory of a category page, relative to the public dir
pub fn category_path(config: &SiteConfig, category: &str) -> String {
    join_dir(&config.category_dir, category)
}

/// Directory of a post page, relative to the public dir
pub fn post_path(config: &SiteConfig, post: &Post) -> String {
    join_dir(&config.post_dir, &post.slug)
}

/// Rooted URL of a category page
pub fn category_url(config: &SiteConfig, category: Category) -> String {
    url_for(config, &category_path(config, category.key()))
}

/// Rooted URL of a post page
pub fn post_url(config: &SiteConfig, post: &Post) -> String {
    url_for(config, &post_path(config, post))
}

fn join_dir(dir: &str, name: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        format!("{}/", name)
    } else {
        format!("{}/{}/", dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/blog/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/blog/about/");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/about/"),
            "https://example.com/blog/about/"
        );
    }

    #[test]
    fn test_category_url() {
        let mut config = test_config();
        assert_eq!(
            category_url(&config, Category::SvelteKit),
            "/blog/category/sveltekit/"
        );

        config.category_dir = String::new();
        assert_eq!(category_url(&config, Category::Css), "/blog/css/");
    }

    #[test]
    fn test_post_url() {
        let config = test_config();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let post = Post::new("Flexbox Gaps", Category::Css, date);
        assert_eq!(post_url(&config, &post), "/blog/posts/flexbox-gaps/");
        assert_eq!(post_path(&config, &post), "posts/flexbox-gaps/");
    }
}
