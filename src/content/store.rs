//! Content store - the immutable, in-memory set of all posts

use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use super::{loader, Category, ContentError, Post};

/// All posts of the site, loaded once.
///
/// There is no mutation API: once built, the store is only read, so it can
/// be shared by reference across worker threads.
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Load every document under `content_dir`
    pub fn load<P: AsRef<Path>>(content_dir: P) -> Result<Self, ContentError> {
        let posts = loader::load_posts(content_dir.as_ref())?;
        Self::from_posts(posts)
    }

    /// Build a store from already-parsed posts, enforcing slug uniqueness
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut seen: HashMap<&str, &Post> = HashMap::with_capacity(posts.len());
        let mut errors = Vec::new();

        for post in &posts {
            let first = *seen.entry(post.slug.as_str()).or_insert(post);
            if !std::ptr::eq(first, post) {
                errors.push(ContentError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.source.clone(),
                    second: post.source.clone(),
                });
            }
        }

        if let Some(err) = ContentError::collect(errors) {
            return Err(err);
        }

        Ok(Self { posts })
    }

    /// Every post, drafts included, in load order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Non-draft posts in `category`, in load order.
    ///
    /// An empty result is not an error.
    pub fn posts_by_category(&self, category: Category) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.category == category && p.is_listed())
            .collect()
    }

    /// Non-draft posts across all categories
    pub fn listed(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.is_listed())
    }

    /// Draft posts only
    pub fn drafts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.draft)
    }

    /// Number of listed posts per category, in category table order
    pub fn category_counts(&self) -> IndexMap<Category, usize> {
        let mut counts: IndexMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for post in self.listed() {
            *counts.entry(post.category).or_insert(0) += 1;
        }
        counts
    }
}

/// Order posts newest first.
///
/// Posts with the same date are ordered by slug; undated posts come last.
/// Sorting an already-sorted sequence leaves it unchanged.
pub fn sorted_posts<'a, I>(posts: I) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut sorted: Vec<&Post> = posts.into_iter().collect();
    sorted.sort_by(|a, b| compare_by_date(a, b));
    sorted
}

fn compare_by_date(a: &Post, b: &Post) -> Ordering {
    match (a.published, b.published) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.slug.cmp(&b.slug))
}
