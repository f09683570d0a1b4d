// src/views/catalog.rs
use super::layout::{self, PageContext, PageMeta};
use super::product::quote_href;
use super::escape;
use crate::catalog::{Page, ALL_PRODUCTS, APPLICATIONS, CATEGORIES};
use crate::dtos::product::CatalogQuery;
use crate::i18n::category_label;
use crate::models::product::Product;

pub fn render(ctx: &PageContext, query: &CatalogQuery, page: &Page<&Product>) -> String {
    let meta = PageMeta::from_keys(ctx, "catalog.meta_title", "catalog.meta_description");

    let body = format!(
        r#"<nav class="breadcrumbs"><a href="{home}">{home_label}</a> / <span>{title}</span></nav>
<div class="catalog">
<aside class="filters">
{sidebar}
</aside>
<section class="results">
<h1>{heading} <small>({count} {results})</small></h1>
{grid}
{pagination}
</section>
</div>"#,
        home = ctx.href(""),
        home_label = escape(ctx.t("nav.home")),
        title = escape(ctx.t("catalog.title")),
        sidebar = render_sidebar(ctx, query),
        heading = escape(ctx.t("catalog.heading")),
        count = page.total_items,
        results = escape(ctx.t("catalog.results")),
        grid = render_grid(ctx, page),
        pagination = render_pagination(ctx, query, page),
    );

    layout::render(ctx, &meta, &body)
}

fn catalog_href(ctx: &PageContext, query: &CatalogQuery) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        ctx.href("/catalog")
    } else {
        format!("{}?{}", ctx.href("/catalog"), qs)
    }
}

fn render_sidebar(ctx: &PageContext, query: &CatalogQuery) -> String {
    let active = query.filter.active_category();
    let categories: String = std::iter::once(ALL_PRODUCTS)
        .chain(CATEGORIES)
        .map(|category| {
            let selected = match active {
                None => category == ALL_PRODUCTS,
                Some(current) => current == category,
            };
            let target = query.with_filter(|f| f.category = Some(category.to_string()));
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                escape(&catalog_href(ctx, &target)),
                if selected { r#" class="active""# } else { "" },
                escape(&category_label(ctx.locale, category))
            )
        })
        .collect();

    let applications: String = APPLICATIONS
        .iter()
        .map(|application| {
            let selected = query.filter.has_application(application);
            let target = query.with_filter(|f| f.toggle_application(application));
            format!(
                r#"<a class="chip{}" href="{}">{}</a>"#,
                if selected { " active" } else { "" },
                escape(&catalog_href(ctx, &target)),
                escape(application)
            )
        })
        .collect();

    // Submitting the text filters keeps category and applications, and drops the page.
    let mut hidden = String::new();
    if let Some(category) = active {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="category" value="{}">"#,
            escape(category)
        ));
    }
    for application in &query.filter.applications {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="application" value="{}">"#,
            escape(application)
        ));
    }

    format!(
        r#"<h3>{category_title}</h3>
<ul class="categories">{categories}</ul>
<form method="get" action="{action}" class="text-filters">
{hidden}
<label>{search_label}<input type="search" name="search" value="{search}" placeholder="{search_placeholder}"></label>
<label>{cas_label}<input type="text" name="cas" value="{cas}" placeholder="{cas_placeholder}"></label>
<button type="submit" class="button">{apply}</button>
</form>
<h3>{application_title}</h3>
<div class="applications">{applications}</div>
<a class="clear-all" href="{clear}">{clear_label}</a>"#,
        category_title = escape(ctx.t("catalog.category")),
        action = ctx.href("/catalog"),
        search_label = escape(ctx.t("catalog.search")),
        search = escape(&query.filter.search),
        search_placeholder = escape(ctx.t("catalog.search_placeholder")),
        cas_label = escape(ctx.t("catalog.cas")),
        cas = escape(&query.filter.cas),
        cas_placeholder = escape(ctx.t("catalog.cas_placeholder")),
        apply = escape(ctx.t("catalog.apply")),
        application_title = escape(ctx.t("catalog.application")),
        clear = ctx.href("/catalog"),
        clear_label = escape(ctx.t("catalog.clear")),
    )
}

fn render_grid(ctx: &PageContext, page: &Page<&Product>) -> String {
    if page.items.is_empty() {
        return format!(r#"<p class="empty">{}</p>"#, escape(ctx.t("catalog.empty")));
    }

    let cards: String = page
        .items
        .iter()
        .map(|product| {
            let detail = ctx.href(&format!("/product/{}", product.id));
            format!(
                r#"<article class="card product">
<span class="badge {stock_class}">{stock}</span>
<h3><a href="{detail}">{name}</a></h3>
<p class="meta">{category} &middot; CAS {cas} &middot; {application}</p>
<p>{description}</p>
<p class="packaging">{packaging}</p>
<a href="{detail}">{view}</a>
<a class="button" href="{quote}">{quote_label}</a>
</article>"#,
                stock_class = product.stock_status().css_class(),
                stock = escape(&product.stock),
                name = escape(&product.name),
                category = escape(&category_label(ctx.locale, &product.category)),
                cas = escape(&product.cas),
                application = escape(&product.application),
                description = escape(&product.description),
                packaging = escape(&product.packaging),
                view = escape(ctx.t("catalog.view_details")),
                quote = escape(&quote_href(ctx, product)),
                quote_label = escape(ctx.t("catalog.request_quote")),
            )
        })
        .collect();

    format!(r#"<div class="grid">{cards}</div>"#)
}

fn render_pagination(ctx: &PageContext, query: &CatalogQuery, page: &Page<&Product>) -> String {
    if page.total_pages <= 1 {
        return String::new();
    }

    let mut links = String::new();
    if page.has_previous() {
        links.push_str(&format!(
            r#"<a rel="prev" href="{}">{}</a>"#,
            escape(&catalog_href(ctx, &query.with_page(page.number - 1))),
            escape(ctx.t("catalog.previous"))
        ));
    }
    for number in 1..=page.total_pages {
        if number == page.number {
            links.push_str(&format!(r#"<span aria-current="page">{number}</span>"#));
        } else {
            links.push_str(&format!(
                r#"<a href="{}">{number}</a>"#,
                escape(&catalog_href(ctx, &query.with_page(number)))
            ));
        }
    }
    if page.has_next() {
        links.push_str(&format!(
            r#"<a rel="next" href="{}">{}</a>"#,
            escape(&catalog_href(ctx, &query.with_page(page.number + 1))),
            escape(ctx.t("catalog.next"))
        ));
    }

    format!(r#"<nav class="pagination">{links}</nav>"#)
}
