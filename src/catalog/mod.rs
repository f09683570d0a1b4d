// src/catalog/mod.rs
//! In-memory catalog browsing: filtering and fixed-size pagination over a
//! product list that was loaded fresh for the request.

pub mod filter;
pub mod pagination;

pub use filter::{CatalogFilter, ALL_PRODUCTS, APPLICATIONS, CATEGORIES};
pub use pagination::{paginate, total_pages, Page, PAGE_SIZE};

use crate::models::product::Product;

/// Catalog browsing state: the loaded products, the active filter and the current page.
///
/// Any filter change sends the view back to page 1.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    filter: CatalogFilter,
    page: usize,
}

impl CatalogView {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            filter: CatalogFilter::default(),
            page: 1,
        }
    }

    /// Starts from an existing filter and page, as read from a request.
    pub fn with_state(products: Vec<Product>, filter: CatalogFilter, page: usize) -> Self {
        Self {
            products,
            filter,
            page: page.max(1),
        }
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_cas(&mut self, cas: impl Into<String>) {
        self.filter.cas = cas.into();
        self.page = 1;
    }

    pub fn toggle_application(&mut self, application: &str) {
        self.filter.toggle_application(application);
        self.page = 1;
    }

    pub fn clear_all(&mut self) {
        self.filter = CatalogFilter::default();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn filtered(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    pub fn page(&self) -> Page<&Product> {
        Page::new(self.filtered(), self.page, PAGE_SIZE)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_products;
    use super::*;

    fn view_on_page_two() -> CatalogView {
        let mut view = CatalogView::new(sample_products());
        view.go_to_page(2);
        assert_eq!(view.current_page(), 2);
        view
    }

    #[test]
    fn every_filter_change_resets_to_first_page() {
        let mut view = view_on_page_two();
        view.set_category(Some("Saturated Resins".into()));
        assert_eq!(view.current_page(), 1);

        let mut view = view_on_page_two();
        view.set_search("resin");
        assert_eq!(view.current_page(), 1);

        let mut view = view_on_page_two();
        view.set_cas("9003");
        assert_eq!(view.current_page(), 1);

        let mut view = view_on_page_two();
        view.toggle_application("COATINGS");
        assert_eq!(view.current_page(), 1);

        let mut view = view_on_page_two();
        view.clear_all();
        assert_eq!(view.current_page(), 1);
        assert!(view.filter().is_empty());
    }

    #[test]
    fn page_reflects_filtered_set() {
        let mut view = CatalogView::new(sample_products());
        view.set_category(Some("Industrial Pigments".into()));
        let page = view.page();
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.iter().all(|p| p.category == "Industrial Pigments"));
    }

    #[test]
    fn unfiltered_catalog_spans_three_pages() {
        let mut view = CatalogView::new(sample_products());
        assert_eq!(view.page().total_pages, 3);
        view.go_to_page(3);
        let ids: Vec<i64> = view.page().items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![13]);
    }

    #[test]
    fn page_zero_is_first_page() {
        let view = CatalogView::with_state(sample_products(), CatalogFilter::default(), 0);
        assert_eq!(view.current_page(), 1);
    }
}
