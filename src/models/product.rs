use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog entry as authored in the spreadsheet or the static data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cas: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub packaging: String,
    #[serde(
        default,
        rename = "fullDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    Backorder,
    Other,
}

impl StockStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-in",
            StockStatus::Backorder => "stock-backorder",
            StockStatus::Other => "stock-other",
        }
    }
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        match self.stock.trim().to_uppercase().as_str() {
            "IN STOCK" => StockStatus::InStock,
            "BACKORDER" => StockStatus::Backorder,
            _ => StockStatus::Other,
        }
    }

    /// Long description for detail pages, falling back to the short one.
    pub fn long_description(&self) -> &str {
        match self.full_description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.description,
        }
    }
}
