// src/sources/mod.rs
pub mod file;
pub mod sheets;

use thiserror::Error;

use crate::config::AppConfig;
use crate::models::locale::Locale;
use crate::models::product::Product;

pub use file::FileSource;
pub use sheets::GoogleSheetsSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("could not sign service-account assertion: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("invalid source configuration: {0}")]
    Config(String),
    #[error("could not read product file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid product data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where product records come from. The spreadsheet wins when its credentials are configured.
#[derive(Debug, Clone)]
pub enum ProductSource {
    Sheets(GoogleSheetsSource),
    File(FileSource),
}

impl ProductSource {
    pub fn from_config(config: &AppConfig, client: reqwest::Client) -> Self {
        match &config.sheets {
            Some(sheets) => ProductSource::Sheets(GoogleSheetsSource::new(sheets.clone(), client)),
            None => ProductSource::File(FileSource::new(config.data_dir.clone())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProductSource::Sheets(_) => "google-sheets",
            ProductSource::File(_) => "file",
        }
    }

    /// All products for a locale, in source order.
    pub async fn list(&self, locale: Locale) -> Result<Vec<Product>, SourceError> {
        match self {
            ProductSource::Sheets(source) => source.fetch(locale).await,
            ProductSource::File(source) => source.fetch(locale).await,
        }
    }

    pub async fn find(&self, locale: Locale, id: i64) -> Result<Option<Product>, SourceError> {
        let products = self.list(locale).await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }
}
