// src/dtos/product.rs
use serde::Deserialize;

use crate::catalog::CatalogFilter;
use crate::dtos::inquiry::QuoteRequest;
use crate::models::locale::Locale;

/// `?locale=` on the product API.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    pub fn locale(&self) -> Locale {
        Locale::from_query(self.locale.as_deref())
    }
}

/// Catalog page query: `category`, `search`, `cas`, repeated `application`, `page`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filter: CatalogFilter,
    pub page: usize,
}

impl CatalogQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = CatalogQuery { page: 1, ..Default::default() };
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "category" if !value.trim().is_empty() => query.filter.category = Some(value.into_owned()),
                "search" => query.filter.search = value.into_owned(),
                "cas" => query.filter.cas = value.into_owned(),
                "application" if !value.is_empty() && !query.filter.has_application(&value) => {
                    query.filter.applications.push(value.into_owned())
                }
                "page" => query.page = value.trim().parse::<usize>().unwrap_or(1).max(1),
                _ => {}
            }
        }
        query
    }

    /// Query string for this filter state; `page` is only kept when above 1.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(category) = self.filter.active_category() {
            serializer.append_pair("category", category);
        }
        if !self.filter.search.is_empty() {
            serializer.append_pair("search", &self.filter.search);
        }
        if !self.filter.cas.is_empty() {
            serializer.append_pair("cas", &self.filter.cas);
        }
        for application in &self.filter.applications {
            serializer.append_pair("application", application);
        }
        if self.page > 1 {
            serializer.append_pair("page", &self.page.to_string());
        }
        serializer.finish()
    }

    /// Same filters on another page.
    pub fn with_page(&self, page: usize) -> Self {
        Self { filter: self.filter.clone(), page }
    }

    /// Filters changed through `change`, back on page 1.
    pub fn with_filter(&self, change: impl FnOnce(&mut CatalogFilter)) -> Self {
        let mut filter = self.filter.clone();
        change(&mut filter);
        Self { filter, page: 1 }
    }
}

/// Quote page prefill, as linked from product cards.
#[derive(Debug, Default, Deserialize)]
pub struct QuotePrefill {
    pub product: Option<String>,
    pub category: Option<String>,
    pub cas: Option<String>,
    pub application: Option<String>,
}

/// Category display name to the quote form's select value.
pub fn category_select_value(category: &str) -> Option<&'static str> {
    match category.trim() {
        "Hot Melt Adhesives" => Some("hot-melt"),
        "Saturated Resins" => Some("saturated-resins"),
        "Industrial Pigments" => Some("pigments"),
        _ => None,
    }
}

impl QuotePrefill {
    /// Initial form values. Unknown categories leave the select unchosen.
    pub fn into_request(self) -> QuoteRequest {
        QuoteRequest {
            product: self.product.unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .and_then(category_select_value)
                .unwrap_or_default()
                .to_string(),
            cas: self.cas.unwrap_or_default(),
            application: self.application.unwrap_or_default().to_lowercase(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_applications_and_page() {
        let query = CatalogQuery::parse(Some(
            "category=Saturated+Resins&application=COATINGS&application=FOOD%20INDUSTRY&page=2&cas=9003",
        ));
        assert_eq!(query.filter.category.as_deref(), Some("Saturated Resins"));
        assert_eq!(query.filter.applications, vec!["COATINGS", "FOOD INDUSTRY"]);
        assert_eq!(query.filter.cas, "9003");
        assert_eq!(query.page, 2);
    }

    #[test]
    fn search_and_cas_are_kept_verbatim() {
        let query = CatalogQuery::parse(Some("search=+++&cas=+1309+"));
        assert_eq!(query.filter.search, "   ");
        assert_eq!(query.filter.cas, " 1309 ");
        assert!(!query.filter.is_empty());
    }

    #[test]
    fn bad_page_falls_back_to_first() {
        assert_eq!(CatalogQuery::parse(Some("page=abc")).page, 1);
        assert_eq!(CatalogQuery::parse(Some("page=0")).page, 1);
        assert_eq!(CatalogQuery::parse(None).page, 1);
    }

    #[test]
    fn filter_change_drops_page() {
        let query = CatalogQuery::parse(Some("search=resin&page=3"));
        let toggled = query.with_filter(|f| f.toggle_application("PLASTICS"));
        assert_eq!(toggled.page, 1);
        assert_eq!(toggled.to_query_string(), "search=resin&application=PLASTICS");
        assert_eq!(query.with_page(2).to_query_string(), "search=resin&page=2");
    }

    #[test]
    fn query_string_round_trips_through_parse() {
        let query = CatalogQuery::parse(Some("category=Hot+Melt+Adhesives&application=PACKAGING&page=2"));
        assert_eq!(CatalogQuery::parse(Some(&query.to_query_string())), query);
    }

    #[test]
    fn prefill_maps_category_and_lowercases_application() {
        let prefill = QuotePrefill {
            product: Some("Iron Oxide Red 130".into()),
            category: Some("Industrial Pigments".into()),
            cas: Some("1309-37-1".into()),
            application: Some("COATINGS".into()),
        };
        let form = prefill.into_request();
        assert_eq!(form.product, "Iron Oxide Red 130");
        assert_eq!(form.category, "pigments");
        assert_eq!(form.cas, "1309-37-1");
        assert_eq!(form.application, "coatings");

        let unknown = QuotePrefill { category: Some("Solvents".into()), ..Default::default() };
        assert_eq!(unknown.into_request().category, "");
    }

    #[test]
    fn locale_query_is_lenient() {
        assert_eq!(LocaleQuery { locale: Some("ar".into()) }.locale(), Locale::Ar);
        assert_eq!(LocaleQuery { locale: Some("xx".into()) }.locale(), Locale::En);
        assert_eq!(LocaleQuery::default().locale(), Locale::En);
    }
}
