//! Post model

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::frontmatter::parse_date_string;
use super::{Category, ContentError, FrontMatter};

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Unique, URL-safe identifier
    pub slug: String,

    /// The one category this post belongs to
    pub category: Category,

    /// Publication date; only drafts may leave it unset
    pub published: Option<NaiveDateTime>,

    /// Last revision date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDateTime>,

    /// Drafts never appear in listings
    pub draft: bool,

    /// Short summary shown in listings
    pub description: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Raw markdown body
    pub content: String,

    /// Source file path, relative to the content directory
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Create a published post with minimal required fields
    pub fn new(title: &str, category: Category, published: NaiveDateTime) -> Self {
        let slug = slug::slugify(title);
        Self {
            title: title.to_string(),
            source: PathBuf::from(format!("{}.md", slug)),
            slug,
            category,
            published: Some(published),
            updated: None,
            draft: false,
            description: None,
            tags: Vec::new(),
            content: String::new(),
        }
    }

    /// Build a post from a parsed header.
    ///
    /// `source` is used for error reporting and as the slug fallback (its
    /// file stem) when the header carries no `slug`.
    pub fn from_front_matter(
        source: &Path,
        fm: FrontMatter,
        body: &str,
    ) -> Result<Self, ContentError> {
        let path = source.to_path_buf();

        let title = fm
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ContentError::MissingField {
                path: path.clone(),
                field: "title",
            })?;

        let category = fm.category.ok_or_else(|| ContentError::MissingField {
            path: path.clone(),
            field: "category",
        })?;
        let category = category
            .parse::<Category>()
            .map_err(|e| ContentError::UnknownCategory {
                path: path.clone(),
                value: e.0,
            })?;

        let slug = match fm.slug {
            Some(slug) => slug,
            None => source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string(),
        };
        if !is_valid_slug(&slug) {
            return Err(ContentError::InvalidSlug { path, slug });
        }

        let published = parse_date_field(&path, "published", fm.published.as_deref())?;
        if published.is_none() && !fm.draft {
            return Err(ContentError::MissingField {
                path,
                field: "published",
            });
        }
        let updated = parse_date_field(&path, "updated", fm.updated.as_deref())?;

        Ok(Self {
            title,
            slug,
            category,
            published,
            updated,
            draft: fm.draft,
            description: fm.description.filter(|d| !d.trim().is_empty()),
            tags: fm.tags,
            content: body.to_string(),
            source: path,
        })
    }

    /// Whether the post may appear in listings
    pub fn is_listed(&self) -> bool {
        !self.draft
    }
}

/// Check that a slug is lowercase words of `[a-z0-9]` joined by single hyphens
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

fn parse_date_field(
    path: &Path,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, ContentError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date_string(s)
            .map(Some)
            .ok_or_else(|| ContentError::InvalidDate {
                path: path.to_path_buf(),
                field,
                value: s.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(category: Option<&str>, published: Option<&str>) -> FrontMatter {
        FrontMatter {
            title: Some("Server Actions".to_string()),
            category: category.map(str::to_string),
            published: published.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_front_matter() {
        let post = Post::from_front_matter(
            Path::new("next/server-actions.md"),
            front_matter(Some("next"), Some("2023-09-08")),
            "Body",
        )
        .unwrap();

        assert_eq!(post.slug, "server-actions");
        assert_eq!(post.category, Category::Next);
        assert_eq!(
            post.published.unwrap().format("%Y-%m-%d").to_string(),
            "2023-09-08"
        );
        assert_eq!(post.content, "Body");
        assert!(post.is_listed());
    }

    #[test]
    fn test_missing_category() {
        let err = Post::from_front_matter(
            Path::new("a.md"),
            front_matter(None, Some("2023-09-08")),
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField {
                field: "category",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_title() {
        let mut fm = front_matter(Some("css"), Some("2023-09-08"));
        fm.title = Some("   ".to_string());
        let err = Post::from_front_matter(Path::new("a.md"), fm, "").unwrap_err();
        assert!(matches!(err, ContentError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_unknown_category() {
        let err = Post::from_front_matter(
            Path::new("a.md"),
            front_matter(Some("cobol"), Some("2023-09-08")),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::UnknownCategory { value, .. } if value == "cobol"));
    }

    #[test]
    fn test_invalid_date() {
        let err = Post::from_front_matter(
            Path::new("a.md"),
            front_matter(Some("css"), Some("someday")),
            "",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidDate {
                field: "published",
                ..
            }
        ));
    }

    #[test]
    fn test_published_required_unless_draft() {
        let err = Post::from_front_matter(Path::new("a.md"), front_matter(Some("css"), None), "")
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField {
                field: "published",
                ..
            }
        ));

        let mut fm = front_matter(Some("css"), None);
        fm.draft = true;
        let draft = Post::from_front_matter(Path::new("a.md"), fm, "").unwrap();
        assert!(draft.published.is_none());
        assert!(!draft.is_listed());
    }

    #[test]
    fn test_explicit_slug_is_validated() {
        let mut fm = front_matter(Some("css"), Some("2024-01-01"));
        fm.slug = Some("Not A Slug".to_string());
        let err = Post::from_front_matter(Path::new("a.md"), fm, "").unwrap_err();
        assert!(matches!(err, ContentError::InvalidSlug { .. }));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("hello-world"));
        assert!(is_valid_slug("css3"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper"));
    }

    #[test]
    fn test_new_slugifies_title() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let post = Post::new("Hello, SvelteKit!", Category::SvelteKit, date);
        assert_eq!(post.slug, "hello-sveltekit");
        assert!(is_valid_slug(&post.slug));
    }
}
