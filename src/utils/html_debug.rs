// src/utils/html_debug.rs
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tdnet::client::{FetchOutcome, PageSource};
use crate::utils::error::FetchError;

/// Saves raw page HTML to a file, creating parent directories as needed.
pub fn save_debug_html(html: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    tracing::debug!("Saved debug HTML to {}", path.display());
    Ok(())
}

/// Wraps a page source and keeps a copy of every page body it returns.
/// Failing to write a copy is logged and otherwise ignored.
pub struct DebugPageSource<'a, S: ?Sized> {
    inner: &'a S,
    dir: PathBuf,
}

impl<'a, S: PageSource + ?Sized> DebugPageSource<'a, S> {
    pub fn new(inner: &'a S, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }

    /// `.../I_list_001_20240105.html` -> `<dir>/I_list_001_20240105.html`
    fn dump_path(&self, url: &str) -> PathBuf {
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("page.html");
        self.dir.join(file_name)
    }
}

#[async_trait]
impl<'a, S: PageSource + ?Sized> PageSource for DebugPageSource<'a, S> {
    async fn fetch_page(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let outcome = self.inner.fetch_page(url).await?;
        if let FetchOutcome::Page(body) = &outcome {
            let path = self.dump_path(url);
            match save_debug_html(body, &path) {
                Ok(()) => tracing::info!("Saved raw page to: {}", path.display()),
                Err(e) => tracing::warn!("Failed to save raw page {}: {}", path.display(), e),
            }
        }
        Ok(outcome)
    }
}
