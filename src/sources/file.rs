// src/sources/file.rs
use std::path::PathBuf;

use tracing::{debug, instrument};

use super::SourceError;
use crate::models::locale::Locale;
use crate::models::product::Product;

const DEFAULT_FILE: &str = "products.json";

/// Static JSON product list on disk, with an optional per-locale override file.
#[derive(Debug, Clone)]
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    async fn path_for(&self, locale: Locale) -> PathBuf {
        let localized = self.data_dir.join(format!("products.{}.json", locale.code()));
        if tokio::fs::try_exists(&localized).await.unwrap_or(false) {
            localized
        } else {
            self.data_dir.join(DEFAULT_FILE)
        }
    }

    #[instrument(skip(self), fields(dir = %self.data_dir.display()))]
    pub async fn fetch(&self, locale: Locale) -> Result<Vec<Product>, SourceError> {
        let path = self.path_for(locale).await;
        debug!(path = %path.display(), "Reading product file");
        let content = tokio::fs::read_to_string(&path).await?;
        let products = serde_json::from_str(&content)?;
        Ok(products)
    }
}
