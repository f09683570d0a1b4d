// src/handlers/seo.rs
use axum::{extract::State, http::header, response::IntoResponse};
use chrono::{NaiveDate, Utc};

use crate::models::locale::Locale;
use crate::state::AppState;
use crate::views::escape;

/// Locale pages listed in the sitemap: path, change frequency, priority.
const SITEMAP_PAGES: [(&str, &str, &str); 8] = [
    ("/catalog", "daily", "0.9"),
    ("/quote", "monthly", "0.9"),
    ("/contact", "monthly", "0.8"),
    ("/company", "monthly", "0.7"),
    ("/shipping", "monthly", "0.7"),
    ("/careers", "weekly", "0.6"),
    ("/privacy", "yearly", "0.3"),
    ("/terms", "yearly", "0.3"),
];

struct SitemapEntry {
    loc: String,
    changefreq: &'static str,
    priority: &'static str,
}

fn sitemap_entries(site_url: &str) -> Vec<SitemapEntry> {
    let mut entries = vec![SitemapEntry {
        loc: site_url.to_string(),
        changefreq: "weekly",
        priority: "1.0",
    }];
    for locale in Locale::ALL {
        entries.push(SitemapEntry {
            loc: format!("{site_url}/{locale}"),
            changefreq: "weekly",
            priority: "1.0",
        });
    }
    for (path, changefreq, priority) in SITEMAP_PAGES {
        for locale in Locale::ALL {
            entries.push(SitemapEntry {
                loc: format!("{site_url}/{locale}{path}"),
                changefreq,
                priority,
            });
        }
    }
    entries
}

pub fn render_sitemap(site_url: &str, lastmod: NaiveDate) -> String {
    let urls: String = sitemap_entries(site_url)
        .iter()
        .map(|entry| {
            format!(
                "<url><loc>{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{}</priority></url>\n",
                escape(&entry.loc),
                lastmod.format("%Y-%m-%d"),
                entry.changefreq,
                entry.priority
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_sitemap(&state.config.site_url, Utc::now().date_naive());
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body)
}

// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let body = format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        state.config.site_url
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_lists_root_homes_and_every_page_per_locale() {
        let entries = sitemap_entries("https://chemdist-global.com");
        assert_eq!(entries.len(), 1 + 2 + SITEMAP_PAGES.len() * 2);
        assert_eq!(entries[0].loc, "https://chemdist-global.com");
        assert!(entries.iter().any(|e| e.loc == "https://chemdist-global.com/ar/careers" && e.changefreq == "weekly"));
    }

    #[test]
    fn sitemap_xml_carries_lastmod_and_priority() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let xml = render_sitemap("https://chemdist-global.com", date);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(
            "<url><loc>https://chemdist-global.com/en/catalog</loc><lastmod>2026-03-01</lastmod><changefreq>daily</changefreq><priority>0.9</priority></url>"
        ));
        assert_eq!(xml.matches("<url>").count(), 19);
    }
}
