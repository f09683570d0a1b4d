// src/catalog/filter.rs
use crate::models::product::Product;

/// Sentinel category meaning "no category constraint".
pub const ALL_PRODUCTS: &str = "All Products";

pub const CATEGORIES: [&str; 3] = ["Hot Melt Adhesives", "Saturated Resins", "Industrial Pigments"];

pub const APPLICATIONS: [&str; 4] = ["PACKAGING", "FOOD INDUSTRY", "COATINGS", "PLASTICS"];

/// Active catalog filters. Dimensions are ANDed; applications are ORed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search: String,
    pub cas: String,
    pub applications: Vec<String>,
}

impl CatalogFilter {
    /// Category constraint, if any. `All Products` and blank mean none.
    pub fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_PRODUCTS)
    }

    pub fn is_empty(&self) -> bool {
        self.active_category().is_none()
            && self.search.is_empty()
            && self.cas.is_empty()
            && self.applications.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_match = self
            .active_category()
            .is_none_or(|category| product.category == category);

        let cas_match = self.cas.is_empty() || product.cas.contains(&self.cas);

        let application_match =
            self.applications.is_empty() || self.applications.iter().any(|a| *a == product.application);

        let search_match = {
            let query = self.search.to_lowercase();
            query.is_empty()
                || product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product.category.to_lowercase().contains(&query)
        };

        category_match && cas_match && application_match && search_match
    }

    /// Matching products, in source order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn has_application(&self, application: &str) -> bool {
        self.applications.iter().any(|a| a == application)
    }

    /// Adds the application if absent, removes it if present.
    pub fn toggle_application(&mut self, application: &str) {
        if let Some(pos) = self.applications.iter().position(|a| a == application) {
            self.applications.remove(pos);
        } else {
            self.applications.push(application.to_string());
        }
    }
}
