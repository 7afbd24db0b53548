//! Errors raised while loading the content set

use std::path::PathBuf;
use thiserror::Error;

/// Content loading errors.
///
/// Every variant fails the build; there is no recovery path at generation time.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error when reading `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content directory `{}` does not exist", .path.display())]
    MissingContentDir { path: PathBuf },

    #[error("`{}` has no front-matter header", .path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("malformed front-matter in `{}`: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("`{}` is missing required field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("`{}` has an invalid `{field}` date: {value:?}", .path.display())]
    InvalidDate {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("`{}` names unknown category {value:?}", .path.display())]
    UnknownCategory { path: PathBuf, value: String },

    #[error("`{}` has an invalid slug {slug:?} (expected lowercase words joined by hyphens)", .path.display())]
    InvalidSlug { path: PathBuf, slug: String },

    #[error("duplicate slug `{slug}` in `{}` and `{}`", .first.display(), .second.display())]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{} documents failed to load", .0.len())]
    Many(Vec<ContentError>),
}

impl ContentError {
    /// Collapse a list of errors into one, or `None` if the list is empty
    pub fn collect(mut errors: Vec<ContentError>) -> Option<ContentError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ContentError::Many(errors)),
        }
    }

    /// Whether this error is about a document's metadata header
    pub fn is_malformed_metadata(&self) -> bool {
        matches!(
            self,
            ContentError::MissingFrontMatter { .. }
                | ContentError::Malformed { .. }
                | ContentError::MissingField { .. }
                | ContentError::InvalidDate { .. }
                | ContentError::UnknownCategory { .. }
                | ContentError::InvalidSlug { .. }
        ) || matches!(self, ContentError::Many(errors) if errors.iter().any(|e| e.is_malformed_metadata()))
    }
}
