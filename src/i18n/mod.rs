// src/i18n/mod.rs
//! English/Arabic site copy. Lookups fall back to English, then to `""`.

mod messages;

pub use messages::t;

use crate::catalog::filter::{ALL_PRODUCTS, CATEGORIES};
use crate::models::locale::Locale;

/// Display label for a catalog category value; unknown categories are shown as-is.
pub fn category_label(locale: Locale, category: &str) -> String {
    let key = match category {
        c if c == CATEGORIES[0] => "category.hot_melt",
        c if c == CATEGORIES[1] => "category.resins",
        c if c == CATEGORIES[2] => "category.pigments",
        ALL_PRODUCTS => "category.all",
        _ => return category.to_string(),
    };
    t(locale, key).to_string()
}
