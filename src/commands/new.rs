//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::Category;
use crate::Site;

/// Default scaffold, used when `scaffolds/post.md` does not exist
const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
slug: {{ slug }}
category: {{ category }}
published: {{ date }}
draft: {{ draft }}
description:
---
"#;

/// Create a new post under `<content_dir>/<category>/<slug>.md`.
///
/// New posts are drafts unless `publish` is set.
pub fn create_post(site: &Site, title: &str, category: Category, publish: bool) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    let target_dir = site.content_dir.join(category.key());
    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_path = site.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    // Title last, as a YAML scalar
    let title_yaml = serde_yaml::to_string(title)?;
    let now = chrono::Local::now();
    let content = scaffold
        .replace("{{ slug }}", &slug)
        .replace("{{ category }}", category.key())
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{ draft }}", if publish { "false" } else { "true" })
        .replace("{{ title }}", title_yaml.trim_end());

    fs::create_dir_all(&target_dir)?;
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
