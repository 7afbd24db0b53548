//! Content loader - reads posts from the content directory

use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{ContentError, FrontMatter, Post};

/// Load every markdown document under `content_dir`.
///
/// Documents are visited in file-name order. Any document that fails to
/// parse fails the whole load; all failures are reported together. A
/// missing `content_dir` is an error, not an empty site.
pub fn load_posts(content_dir: &Path) -> Result<Vec<Post>, ContentError> {
    if !content_dir.is_dir() {
        return Err(ContentError::MissingContentDir {
            path: content_dir.to_path_buf(),
        });
    }

    let mut posts = Vec::new();
    let mut errors = Vec::new();

    let walker = WalkDir::new(content_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(content_dir).to_path_buf();
                errors.push(ContentError::Io {
                    path,
                    source: e.into(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }

        match load_post(content_dir, path) {
            Ok(post) => {
                tracing::debug!("Loaded {:?} as `{}`", post.source, post.slug);
                posts.push(post);
            }
            Err(e) => {
                tracing::error!("{}", e);
                errors.push(e);
            }
        }
    }

    if let Some(err) = ContentError::collect(errors) {
        return Err(err);
    }

    Ok(posts)
}

/// Load a single post from a file
fn load_post(content_dir: &Path, path: &Path) -> Result<Post, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Calculate source path relative to the content dir
    let source = path.strip_prefix(content_dir).unwrap_or(path);

    let (fm, body) = FrontMatter::parse(source, &content)?;
    Post::from_front_matter(source, fm, body)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
