// src/handlers/pages.rs
use axum::{
    extract::{FromRequestParts, Path, Query, RawForm, RawQuery, State},
    http::{header, request::Parts, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::catalog::CatalogView;
use crate::dtos::inquiry::{ContactRequest, QuoteRequest};
use crate::dtos::product::{category_select_value, CatalogQuery, QuotePrefill};
use crate::models::locale::Locale;
use crate::models::product::Product;
use crate::relay::RelayError;
use crate::state::AppState;
use crate::views::info::InfoPage;
use crate::views::{self, Banner, PageContext, Theme};

const THEME_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Splits `/ar/catalog` into the locale and the remaining path.
fn split_locale(path: &str) -> Option<(Locale, String)> {
    let path = path.trim_end_matches('/');
    let rest = path.strip_prefix('/').unwrap_or(path);
    let (code, tail) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    Locale::from_code(code).map(|locale| (locale, tail.to_string()))
}

fn theme_from(headers: &HeaderMap) -> Theme {
    Theme::from_cookie_header(headers.get(header::COOKIE).and_then(|v| v.to_str().ok()))
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = NotFoundPage;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let theme = theme_from(&parts.headers);
        let site_url = state.config.site_url.clone();
        match split_locale(parts.uri.path()) {
            Some((locale, path)) => Ok(PageContext {
                locale,
                path,
                theme,
                site_url,
                query: parts.uri.query().map(str::to_string),
            }),
            None => Err(NotFoundPage(PageContext {
                locale: Locale::En,
                path: String::new(),
                theme,
                site_url,
                query: None,
            })),
        }
    }
}

/// HTML 404 rendered in the context's locale.
#[derive(Debug)]
pub struct NotFoundPage(pub PageContext);

impl IntoResponse for NotFoundPage {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Html(views::layout::render_not_found(&self.0))).into_response()
    }
}

async fn load_products(state: &AppState, locale: Locale) -> Vec<Product> {
    match state.products.list(locale).await {
        Ok(products) => products,
        Err(e) => {
            error!(error = %e, source = state.products.kind(), %locale, "Failed to fetch products");
            Vec::new()
        }
    }
}

// GET /
pub async fn root() -> Redirect {
    Redirect::temporary("/en")
}

// Anything no route matched
pub async fn fallback(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> NotFoundPage {
    let theme = theme_from(&headers);
    let locale = split_locale(uri.path()).map(|(l, _)| l).unwrap_or_default();
    NotFoundPage(PageContext {
        locale,
        path: String::new(),
        theme,
        site_url: state.config.site_url.clone(),
        query: None,
    })
}

// GET /{locale}
pub async fn home(ctx: PageContext) -> Html<String> {
    Html(views::home::render(&ctx))
}

// GET /{locale}/catalog?category=&search=&cas=&application=&page=
#[instrument(skip(ctx, state), fields(locale = %ctx.locale))]
pub async fn catalog(ctx: PageContext, State(state): State<AppState>, RawQuery(raw): RawQuery) -> Html<String> {
    let query = CatalogQuery::parse(raw.as_deref());
    let products = load_products(&state, ctx.locale).await;
    let view = CatalogView::with_state(products, query.filter.clone(), query.page);
    Html(views::catalog::render(&ctx, &query, &view.page()))
}

// GET /{locale}/product/{id}
#[instrument(skip(ctx, state), fields(locale = %ctx.locale))]
pub async fn product(
    ctx: PageContext,
    State(state): State<AppState>,
    Path((_, id)): Path<(String, String)>,
) -> Response {
    let product = match id.trim().parse::<i64>() {
        Ok(id) => match state.products.find(ctx.locale, id).await {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, id, "Failed to fetch product");
                None
            }
        },
        Err(_) => None,
    };

    match product {
        Some(product) => Html(views::product::render(&ctx, &product)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(views::product::render_not_found(&ctx))).into_response(),
    }
}

async fn quote_page(ctx: &PageContext, state: &AppState, form: &QuoteRequest, banner: Option<&Banner>) -> Html<String> {
    let names: Vec<String> = load_products(state, ctx.locale)
        .await
        .into_iter()
        .filter(|p| form.category.is_empty() || category_select_value(&p.category) == Some(form.category.as_str()))
        .map(|p| p.name)
        .collect();
    Html(views::forms::render_quote(ctx, form, &names, banner))
}

// GET /{locale}/quote?product=&category=&cas=&application=
pub async fn quote(
    ctx: PageContext,
    State(state): State<AppState>,
    Query(prefill): Query<QuotePrefill>,
) -> Html<String> {
    let form = prefill.into_request();
    quote_page(&ctx, &state, &form, None).await
}

/// Status and banner for a failed submission.
fn failure_banner(ctx: &PageContext, err: &RelayError, error_key: &str) -> (StatusCode, Banner) {
    match err {
        RelayError::NotConfigured => (
            StatusCode::SERVICE_UNAVAILABLE,
            Banner::Error(ctx.t("form.unavailable").to_string()),
        ),
        _ => (StatusCode::BAD_GATEWAY, Banner::Error(ctx.t(error_key).to_string())),
    }
}

// POST /{locale}/quote
#[instrument(skip(ctx, state, body), fields(locale = %ctx.locale))]
pub async fn submit_quote(ctx: PageContext, State(state): State<AppState>, RawForm(body): RawForm) -> Response {
    let form = QuoteRequest::from_form_pairs(url::form_urlencoded::parse(&body));

    if let Err(e) = form.validate() {
        warn!(?e, "Rejected quote form");
        let banner = Banner::Error(ctx.t("form.invalid").to_string());
        return (StatusCode::BAD_REQUEST, quote_page(&ctx, &state, &form, Some(&banner)).await).into_response();
    }

    match state.relay.send_quote(&form, ctx.locale).await {
        Ok(()) => {
            info!("Quote form relayed");
            let banner = Banner::Success(ctx.t("quote.success").to_string());
            quote_page(&ctx, &state, &QuoteRequest::default(), Some(&banner)).await.into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to relay quote form");
            let (status, banner) = failure_banner(&ctx, &e, "quote.error");
            (status, quote_page(&ctx, &state, &form, Some(&banner)).await).into_response()
        }
    }
}

// GET /{locale}/contact
pub async fn contact(ctx: PageContext, State(state): State<AppState>) -> Html<String> {
    Html(views::forms::render_contact(
        &ctx,
        &ContactRequest::default(),
        &state.config.relay.sales_email,
        None,
    ))
}

// POST /{locale}/contact
#[instrument(skip(ctx, state, form), fields(locale = %ctx.locale))]
pub async fn submit_contact(
    ctx: PageContext,
    State(state): State<AppState>,
    Form(form): Form<ContactRequest>,
) -> Response {
    let sales_email = &state.config.relay.sales_email;

    if let Err(e) = form.validate() {
        warn!(?e, "Rejected contact form");
        let banner = Banner::Error(ctx.t("form.invalid").to_string());
        let html = views::forms::render_contact(&ctx, &form, sales_email, Some(&banner));
        return (StatusCode::BAD_REQUEST, Html(html)).into_response();
    }

    match state.relay.send_contact(&form, ctx.locale).await {
        Ok(()) => {
            info!("Contact form relayed");
            let banner = Banner::Success(ctx.t("contact.success").to_string());
            Html(views::forms::render_contact(&ctx, &ContactRequest::default(), sales_email, Some(&banner)))
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to relay contact form");
            let (status, banner) = failure_banner(&ctx, &e, "contact.error");
            (status, Html(views::forms::render_contact(&ctx, &form, sales_email, Some(&banner)))).into_response()
        }
    }
}

// GET /{locale}/{company|careers|shipping|terms|privacy}
pub async fn info(ctx: PageContext, page: InfoPage) -> Html<String> {
    Html(views::info::render(&ctx, page))
}

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub next: Option<String>,
}

/// Only same-site absolute paths are followed.
fn safe_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => "/en",
    }
}

// GET /theme/{mode}?next=
pub async fn set_theme(Path(mode): Path<String>, Query(query): Query<ThemeQuery>) -> Response {
    let target = safe_redirect_target(query.next.as_deref());
    let Some(theme) = Theme::from_slug(&mode) else {
        return Redirect::to(target).into_response();
    };
    let cookie = format!(
        "theme={}; Path=/; Max-Age={THEME_COOKIE_MAX_AGE}; SameSite=Lax",
        theme.as_str()
    );
    ([(header::SET_COOKIE, cookie)], Redirect::to(target)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_locale_prefix() {
        assert_eq!(split_locale("/ar/catalog"), Some((Locale::Ar, "/catalog".to_string())));
        assert_eq!(split_locale("/en"), Some((Locale::En, String::new())));
        assert_eq!(split_locale("/en/"), Some((Locale::En, String::new())));
        assert_eq!(split_locale("/en/product/4"), Some((Locale::En, "/product/4".to_string())));
        assert_eq!(split_locale("/fr/catalog"), None);
        assert_eq!(split_locale("/"), None);
    }

    #[test]
    fn redirect_target_stays_on_site() {
        assert_eq!(safe_redirect_target(Some("/ar/catalog?page=2")), "/ar/catalog?page=2");
        assert_eq!(safe_redirect_target(Some("//evil.example")), "/en");
        assert_eq!(safe_redirect_target(Some("https://evil.example")), "/en");
        assert_eq!(safe_redirect_target(None), "/en");
    }
}
