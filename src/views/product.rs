// src/views/product.rs
use super::layout::{self, PageContext, PageMeta};
use super::escape;
use crate::i18n::category_label;
use crate::models::product::Product;

/// Quote page link with the product's fields as prefill.
pub fn quote_href(ctx: &PageContext, product: &Product) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("product", &product.name)
        .append_pair("category", &product.category)
        .append_pair("cas", &product.cas)
        .append_pair("application", &product.application)
        .finish();
    format!("{}?{query}", ctx.href("/quote"))
}

pub fn render(ctx: &PageContext, product: &Product) -> String {
    let meta = PageMeta::new(&product.name, &product.description);

    let facts: String = [
        ("product.category", category_label(ctx.locale, &product.category)),
        ("product.cas", product.cas.clone()),
        ("product.application", product.application.clone()),
        ("product.packaging", product.packaging.clone()),
    ]
    .iter()
    .map(|(key, value)| format!("<dt>{}</dt><dd>{}</dd>", escape(ctx.t(key)), escape(value)))
    .collect();

    let specifications = if product.specifications.is_empty() {
        format!("<p>{}</p>", escape(ctx.t("product.no_specifications")))
    } else {
        let rows: String = product
            .specifications
            .iter()
            .map(|(name, value)| format!("<tr><th>{}</th><td>{}</td></tr>", escape(name), escape(value)))
            .collect();
        format!(r#"<table class="specifications">{rows}</table>"#)
    };

    let body = format!(
        r#"<nav class="breadcrumbs"><a href="{home}">{home_label}</a> / <a href="{catalog}">{catalog_label}</a> / <span>{name}</span></nav>
<article class="product-detail">
<header>
<span class="badge {stock_class}">{stock}</span>
<h1>{name}</h1>
<p>{description}</p>
<dl class="facts">{facts}</dl>
<a class="button" href="{quote}">{quote_label}</a>
</header>
<section>
<h2>{overview}</h2>
<p>{long_description}</p>
</section>
<section>
<h2>{specifications_title}</h2>
{specifications}
</section>
<section class="documents">
<h2>{documents}</h2>
<ul><li>{sds}</li><li>{coa}</li></ul>
<p>{documents_note}</p>
</section>
<a href="{catalog}">{back}</a>
</article>"#,
        home = ctx.href(""),
        home_label = escape(ctx.t("nav.home")),
        catalog = ctx.href("/catalog"),
        catalog_label = escape(ctx.t("nav.catalog")),
        name = escape(&product.name),
        stock_class = product.stock_status().css_class(),
        stock = escape(&product.stock),
        description = escape(&product.description),
        quote = escape(&quote_href(ctx, product)),
        quote_label = escape(ctx.t("product.request_quote")),
        overview = escape(ctx.t("product.overview")),
        long_description = escape(product.long_description()),
        specifications_title = escape(ctx.t("product.specifications")),
        documents = escape(ctx.t("product.documents")),
        sds = escape(ctx.t("product.sds")),
        coa = escape(ctx.t("product.coa")),
        documents_note = escape(ctx.t("product.documents_note")),
        back = escape(ctx.t("product.back")),
    );

    layout::render(ctx, &meta, &body)
}

pub fn render_not_found(ctx: &PageContext) -> String {
    let title = ctx.t("product.not_found");
    let body = format!(
        r#"<section class="not-found">
<h1>{}</h1>
<a class="button" href="{}">{}</a>
</section>"#,
        escape(title),
        ctx.href("/catalog"),
        escape(ctx.t("product.back"))
    );
    layout::render(ctx, &PageMeta::new(title, ctx.t("meta.description")), &body)
}
