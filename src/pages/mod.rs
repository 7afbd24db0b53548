//! Category pages - binds the content store to the render contract
//!
//! Every category page is produced by the same function, parameterized only
//! by the [`Category`]. The result borrows from the store and never mutates it.

use serde::Serialize;

use crate::content::{sorted_posts, Category, ContentStore, Post};

/// Payload handed to a renderer for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPage<'a> {
    /// Display name of the category
    pub category: &'static str,
    /// Listed posts, newest first
    pub posts: Vec<&'a Post>,
    /// Page title
    pub title: &'static str,
    /// Category key, used for output paths
    #[serde(skip)]
    pub key: &'static str,
}

impl CategoryPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Build the page payload for one category
pub fn bind(store: &ContentStore, category: Category) -> CategoryPage<'_> {
    let posts = sorted_posts(store.posts_by_category(category));
    CategoryPage {
        category: category.display_name(),
        posts,
        title: category.display_name(),
        key: category.key(),
    }
}

/// Build the page payload for every category, in table order
pub fn bind_all(store: &ContentStore) -> Vec<CategoryPage<'_>> {
    Category::ALL.iter().map(|c| bind(store, *c)).collect()
}
