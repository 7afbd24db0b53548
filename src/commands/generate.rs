//! Generate static files

use anyhow::Result;

use crate::content::ContentStore;
use crate::generator::{GenerateStats, Generator};
use crate::Site;

/// Load the content set and generate the static site
pub fn run(site: &Site) -> Result<GenerateStats> {
    let start = std::time::Instant::now();

    let store = match ContentStore::load(&site.content_dir) {
        Ok(store) => store,
        Err(e) => {
            if e.is_malformed_metadata() {
                tracing::error!("Build aborted on malformed front-matter, {:?} left untouched", site.public_dir);
            }
            return Err(e.into());
        }
    };
    tracing::info!(
        "Loaded {} posts ({} drafts)",
        store.len(),
        store.drafts().count()
    );

    let stats = Generator::new(site).generate(&store)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files for {} categories and {} posts in {:.2}s",
        stats.files,
        stats.categories,
        stats.posts,
        duration.as_secs_f64()
    );

    Ok(stats)
}
