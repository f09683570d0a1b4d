// src/views/layout.rs
//! Document shell shared by every page: SEO head, header with language and
//! theme switchers, footer.

use chrono::{Datelike, Utc};

use super::escape;
use crate::catalog::CATEGORIES;
use crate::i18n::{category_label, t};
use crate::models::locale::Locale;

const SITE_NAME: &str = "ChemDist Global";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Theme> {
        match slug {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads the `theme` cookie out of a `Cookie` header value.
    pub fn from_cookie_header(header: Option<&str>) -> Theme {
        header
            .into_iter()
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == "theme")
            .and_then(|(_, value)| Theme::from_slug(value.trim()))
            .unwrap_or_default()
    }
}

/// Everything a view needs to know about the request it renders for.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub locale: Locale,
    /// Path after the locale prefix, e.g. `/catalog`; empty for the home page.
    pub path: String,
    pub theme: Theme,
    pub site_url: String,
    /// Raw query string of the request, without the `?`.
    pub query: Option<String>,
}

impl PageContext {
    pub fn t(&self, key: &str) -> &'static str {
        t(self.locale, key)
    }

    /// Link to a page in the current locale.
    pub fn href(&self, path: &str) -> String {
        format!("/{}{}", self.locale, path)
    }

    pub fn url_for(&self, locale: Locale) -> String {
        format!("{}/{}{}", self.site_url, locale, self.path)
    }

    pub fn canonical(&self) -> String {
        self.url_for(self.locale)
    }

    /// The page being rendered, query included.
    pub fn current_href(&self) -> String {
        match self.query.as_deref().filter(|q| !q.is_empty()) {
            Some(query) => format!("{}?{query}", self.href(&self.path)),
            None => self.href(&self.path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// `<title>` follows the `%s | ChemDist Global` template.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: format!("{title} | {SITE_NAME}"),
            description: description.to_string(),
        }
    }

    pub fn from_keys(ctx: &PageContext, title_key: &str, description_key: &str) -> Self {
        Self::new(ctx.t(title_key), ctx.t(description_key))
    }

    /// Site default title and description, used by the home page.
    pub fn site_default(ctx: &PageContext) -> Self {
        Self {
            title: ctx.t("meta.title").to_string(),
            description: ctx.t("meta.description").to_string(),
        }
    }
}

pub fn render(ctx: &PageContext, meta: &PageMeta, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}" class="theme-{theme}">
{head}
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        lang = ctx.locale,
        dir = ctx.locale.dir(),
        theme = ctx.theme.as_str(),
        head = render_head(ctx, meta),
        header = render_header(ctx),
        footer = render_footer(ctx),
    )
}

fn render_head(ctx: &PageContext, meta: &PageMeta) -> String {
    let title = escape(&meta.title);
    let description = escape(&meta.description);
    let canonical = escape(&ctx.canonical());
    let alternates: String = Locale::ALL
        .iter()
        .map(|locale| {
            format!(
                r#"<link rel="alternate" hreflang="{locale}" href="{}">"#,
                escape(&ctx.url_for(*locale))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let site = escape(&ctx.site_url);

    format!(
        r#"<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta name="robots" content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1">
<meta name="author" content="{SITE_NAME}">
<link rel="canonical" href="{canonical}">
{alternates}
<link rel="alternate" hreflang="x-default" href="{site}/en{path}">
<meta property="og:type" content="website">
<meta property="og:locale" content="{og_locale}">
<meta property="og:url" content="{canonical}">
<meta property="og:site_name" content="{SITE_NAME}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:image" content="{site}/og-image.jpg">
<meta property="og:image:width" content="1200">
<meta property="og:image:height" content="630">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
<meta name="twitter:image" content="{site}/twitter-image.jpg">
<meta name="twitter:creator" content="@chemdistglobal">
<style>{STYLE}</style>
</head>"#,
        keywords = escape(ctx.t("meta.keywords")),
        path = escape(&ctx.path),
        og_locale = ctx.locale.og_locale(),
    )
}

fn render_header(ctx: &PageContext) -> String {
    let nav: String = [
        ("/catalog", "nav.catalog"),
        ("/company", "nav.company"),
        ("/careers", "nav.careers"),
        ("/contact", "nav.contact"),
    ]
    .iter()
    .map(|(path, key)| {
        let current = if ctx.path == *path { r#" aria-current="page""# } else { "" };
        format!(r#"<a href="{}"{current}>{}</a>"#, ctx.href(path), escape(ctx.t(key)))
    })
    .collect();

    let languages: String = Locale::ALL
        .iter()
        .map(|locale| {
            let class = if *locale == ctx.locale { r#" class="active""# } else { "" };
            format!(
                r#"<a href="/{locale}{}" hreflang="{locale}" lang="{locale}"{class}>{}</a>"#,
                escape(&ctx.path),
                locale.native_name()
            )
        })
        .collect();

    let next_theme = ctx.theme.toggled();
    let theme_label = match next_theme {
        Theme::Dark => ctx.t("nav.theme_dark"),
        Theme::Light => ctx.t("nav.theme_light"),
    };
    let back_to = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("next", &ctx.current_href())
        .finish();

    format!(
        r#"<header class="site-header">
<a class="logo" href="{home}">{name}</a>
<nav class="main-nav">{nav}</nav>
<div class="switchers">
<nav class="language-switcher" aria-label="{language}">{languages}</nav>
<a class="theme-switcher" href="/theme/{next}?{back_to}">{theme_label}</a>
<a class="button quote-cta" href="{quote}">{quote_label}</a>
</div>
</header>"#,
        home = ctx.href(""),
        name = escape(ctx.t("site.name")),
        language = escape(ctx.t("nav.language")),
        next = next_theme.as_str(),
        theme_label = escape(theme_label),
        quote = ctx.href("/quote"),
        quote_label = escape(ctx.t("nav.quote")),
    )
}

fn render_footer(ctx: &PageContext) -> String {
    let products: String = CATEGORIES
        .iter()
        .map(|category| {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("category", category)
                .finish();
            format!(
                r#"<li><a href="{}?{query}">{}</a></li>"#,
                ctx.href("/catalog"),
                escape(&category_label(ctx.locale, category))
            )
        })
        .collect();

    let links = |items: &[(&str, &str)]| -> String {
        items
            .iter()
            .map(|(path, key)| format!(r#"<li><a href="{}">{}</a></li>"#, ctx.href(path), escape(ctx.t(key))))
            .collect()
    };
    let company = links(&[
        ("/company", "nav.company"),
        ("/careers", "nav.careers"),
        ("/shipping", "nav.shipping"),
        ("/contact", "nav.contact"),
    ]);
    let legal = links(&[("/terms", "nav.terms"), ("/privacy", "nav.privacy")]);

    format!(
        r#"<footer class="site-footer">
<div class="footer-about"><strong>{name}</strong><p>{about}</p></div>
<div><h4>{products_title}</h4><ul>{products}</ul></div>
<div><h4>{company_title}</h4><ul>{company}</ul></div>
<div><h4>{legal_title}</h4><ul>{legal}</ul></div>
<p class="copyright">&copy; {year} {name}. {rights}</p>
</footer>"#,
        name = escape(ctx.t("site.name")),
        about = escape(ctx.t("footer.about")),
        products_title = escape(ctx.t("footer.products")),
        company_title = escape(ctx.t("footer.company")),
        legal_title = escape(ctx.t("footer.legal")),
        year = Utc::now().year(),
        rights = escape(ctx.t("footer.rights")),
    )
}

/// Page shown for unknown locales and unmatched paths.
pub fn render_not_found(ctx: &PageContext) -> String {
    let title = ctx.t("notfound.title");
    let body = format!(
        r#"<section class="not-found">
<h1>{}</h1>
<p>{}</p>
<a class="button" href="{}">{}</a>
</section>"#,
        escape(title),
        escape(ctx.t("notfound.body")),
        ctx.href(""),
        escape(ctx.t("nav.home"))
    );
    render(ctx, &PageMeta::new(title, ctx.t("meta.description")), &body)
}

const STYLE: &str = "\
:root{--primary:#0f6c81;--bg:#f7f9fa;--fg:#121617;--card:#fff;--muted:#677e83}\
.theme-dark{--bg:#121617;--fg:#e8eef0;--card:#212121;--muted:#9fb0b4}\
body{margin:0;font-family:Manrope,system-ui,sans-serif;background:var(--bg);color:var(--fg)}\
a{color:var(--primary)}main{max-width:1280px;margin:0 auto;padding:2rem 1.5rem}\
.site-header,.site-footer{display:flex;flex-wrap:wrap;gap:1.5rem;align-items:center;justify-content:space-between;padding:1rem 1.5rem;background:var(--card)}\
.main-nav a,.language-switcher a{margin:0 .5rem}.language-switcher .active{font-weight:700}\
.button{background:var(--primary);color:#fff;padding:.5rem 1rem;border-radius:.5rem;text-decoration:none}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1rem}\
.card{background:var(--card);border-radius:.75rem;padding:1rem}\
.stock-in{color:#1b7f3b}.stock-backorder{color:#b26a00}.stock-other{color:var(--muted)}\
.chip{display:inline-block;padding:.2rem .6rem;border-radius:999px;border:1px solid var(--muted);margin:.2rem;font-size:.7rem;text-decoration:none}\
.chip.active{border-color:var(--primary);font-weight:700}\
.banner{padding:1rem;border-radius:.5rem;margin-bottom:1rem}.banner-success{background:#e3f6ea}.banner-error{background:#fde8e8}\
";

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(locale: Locale, path: &str) -> PageContext {
        PageContext {
            locale,
            path: path.to_string(),
            theme: Theme::Light,
            site_url: "https://chemdist-global.com".to_string(),
            query: None,
        }
    }

    #[test]
    fn theme_cookie_parsing() {
        assert_eq!(Theme::from_cookie_header(Some("a=1; theme=dark")), Theme::Dark);
        assert_eq!(Theme::from_cookie_header(Some("theme=purple")), Theme::Light);
        assert_eq!(Theme::from_cookie_header(None), Theme::Light);
    }

    #[test]
    fn arabic_document_is_rtl() {
        let html = render(&ctx(Locale::Ar, "/company"), &PageMeta::new("شركتنا", "وصف"), "<p>x</p>");
        assert!(html.contains(r#"<html lang="ar" dir="rtl" class="theme-light">"#));
        assert!(html.contains("<title>شركتنا | ChemDist Global</title>"));
    }

    #[test]
    fn head_carries_canonical_and_alternates() {
        let html = render(&ctx(Locale::En, "/catalog"), &PageMeta::new("Catalog", "d"), "");
        assert!(html.contains(r#"<link rel="canonical" href="https://chemdist-global.com/en/catalog">"#));
        assert!(html.contains(r#"hreflang="ar" href="https://chemdist-global.com/ar/catalog""#));
        assert!(html.contains(r#"<meta property="og:locale" content="en_US">"#));
    }

    #[test]
    fn language_switcher_keeps_the_path() {
        let html = render(&ctx(Locale::En, "/product/4"), &PageMeta::new("x", "y"), "");
        assert!(html.contains(r#"<a href="/ar/product/4" hreflang="ar""#));
        assert!(html.contains("/theme/dark?next=%2Fen%2Fproduct%2F4\""));
    }

    #[test]
    fn theme_switcher_keeps_the_query() {
        let ctx = PageContext {
            query: Some("category=Saturated+Resins&page=2".into()),
            ..ctx(Locale::En, "/catalog")
        };
        assert_eq!(ctx.current_href(), "/en/catalog?category=Saturated+Resins&page=2");
        let html = render(&ctx, &PageMeta::new("x", "y"), "");
        assert!(html.contains("/theme/dark?next=%2Fen%2Fcatalog%3Fcategory%3DSaturated%2BResins%26page%3D2"));
    }

    #[test]
    fn empty_query_is_dropped() {
        let ctx = PageContext { query: Some(String::new()), ..ctx(Locale::Ar, "/contact") };
        assert_eq!(ctx.current_href(), "/ar/contact");
    }
}
