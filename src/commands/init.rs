//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Site
title: blogcat
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
public_dir: public
category_dir: category
post_dir: posts

# Writing
date_format: YYYY-MM-DD

# Output formats for category pages: json, html
formats:
  - json
  - html
compact_json: false
"#;

const POST_SCAFFOLD: &str = r#"---
title: {{ title }}
slug: {{ slug }}
category: {{ category }}
published: {{ date }}
draft: {{ draft }}
description:
tags:
---
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join(CONFIG_FILE).exists() {
        bail!("{:?} already contains a {}", target_dir, CONFIG_FILE);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("content/next"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    fs::write(target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("scaffolds/post.md"), POST_SCAFFOLD)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
slug: hello-world
category: next
published: {}
description: The first post of this site
---

Welcome! This is your very first post. Create another one with

```bash
$ blogcat new "My New Post" --category css
```

then build every category page with `blogcat generate`.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("content/next/hello-world.md"), sample_post)?;

    Ok(())
}
