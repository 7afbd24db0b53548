//! Content module - posts, categories, and the content store

mod category;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod store;

pub use category::{Category, UnknownCategory};
pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use markdown::MarkdownRenderer;
pub use post::{is_valid_slug, Post};
pub use store::{sorted_posts, ContentStore};
