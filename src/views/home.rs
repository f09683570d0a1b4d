// src/views/home.rs
use super::layout::{self, PageContext, PageMeta};
use super::escape;
use crate::catalog::CATEGORIES;
use crate::i18n::category_label;

pub fn render(ctx: &PageContext) -> String {
    let categories: String = CATEGORIES
        .iter()
        .map(|category| {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("category", category)
                .finish();
            format!(
                r#"<a class="card category" href="{}?{query}"><h3>{}</h3></a>"#,
                ctx.href("/catalog"),
                escape(&category_label(ctx.locale, category))
            )
        })
        .collect();

    let reasons: String = ["home.why_quality", "home.why_logistics", "home.why_delivery"]
        .iter()
        .map(|key| format!("<li>{}</li>", escape(ctx.t(key))))
        .collect();

    let body = format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p>{subtitle}</p>
<a class="button" href="{catalog}">{cta_catalog}</a>
<a class="button secondary" href="{quote}">{cta_quote}</a>
</section>
<section>
<h2>{categories_title}</h2>
<div class="grid">{categories}</div>
</section>
<section>
<h2>{why_title}</h2>
<ul class="reasons">{reasons}</ul>
</section>"#,
        title = escape(ctx.t("home.hero_title")),
        subtitle = escape(ctx.t("home.hero_subtitle")),
        catalog = ctx.href("/catalog"),
        cta_catalog = escape(ctx.t("home.cta_catalog")),
        quote = ctx.href("/quote"),
        cta_quote = escape(ctx.t("home.cta_quote")),
        categories_title = escape(ctx.t("home.categories_title")),
        why_title = escape(ctx.t("home.why_title")),
    );

    layout::render(ctx, &PageMeta::site_default(ctx), &body)
}
