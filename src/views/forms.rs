// src/views/forms.rs
//! Quote and contact pages. Both re-render with a banner after a POST.

use super::layout::{self, PageContext, PageMeta};
use super::{escape, Banner};
use crate::dtos::inquiry::{ContactRequest, QuoteRequest};

const CATEGORY_OPTIONS: [(&str, &str); 3] = [
    ("hot-melt", "category.hot_melt"),
    ("saturated-resins", "category.resins"),
    ("pigments", "category.pigments"),
];

const FREQUENCY_OPTIONS: [(&str, &str); 3] = [
    ("one-time", "quote.frequency_once"),
    ("monthly", "quote.frequency_monthly"),
    ("quarterly", "quote.frequency_quarterly"),
];

const UNIT_OPTIONS: [&str; 3] = ["kg", "mt", "lbs"];

const INQUIRY_OPTIONS: [(&str, &str); 4] = [
    ("technical", "contact.inquiry_technical"),
    ("sales", "contact.inquiry_sales"),
    ("logistics", "contact.inquiry_logistics"),
    ("other", "contact.inquiry_other"),
];

fn options(selected: &str, items: impl IntoIterator<Item = (String, String)>) -> String {
    items
        .into_iter()
        .map(|(value, label)| {
            let mark = if value == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{mark}>{}</option>"#, escape(&value), escape(&label))
        })
        .collect()
}

fn text_input(label: &str, name: &str, value: &str, kind: &str, required: bool) -> String {
    format!(
        r#"<label>{}<input type="{kind}" name="{name}" value="{}"{}></label>"#,
        escape(label),
        escape(value),
        if required { " required" } else { "" }
    )
}

fn contact_person(ctx: &PageContext, full_name: &str, email: &str, company: &str) -> String {
    [
        text_input(ctx.t("form.full_name"), "fullName", full_name, "text", true),
        text_input(ctx.t("form.email"), "email", email, "email", true),
        text_input(ctx.t("form.company"), "company", company, "text", false),
    ]
    .concat()
}

/// Quote page. `products` feeds the product name suggestions.
pub fn render_quote(ctx: &PageContext, form: &QuoteRequest, products: &[String], banner: Option<&Banner>) -> String {
    let meta = PageMeta::from_keys(ctx, "quote.meta_title", "quote.meta_description");

    let categories = format!(
        r#"<option value="">{}</option>{}"#,
        escape(ctx.t("quote.select_category")),
        options(
            &form.category,
            CATEGORY_OPTIONS.iter().map(|(v, k)| (v.to_string(), ctx.t(k).to_string()))
        )
    );
    let units = options(
        &form.quantity_unit,
        UNIT_OPTIONS.iter().map(|u| (u.to_string(), u.to_uppercase())),
    );
    let frequencies = options(
        &form.frequency,
        FREQUENCY_OPTIONS.iter().map(|(v, k)| (v.to_string(), ctx.t(k).to_string())),
    );
    let suggestions: String = products
        .iter()
        .map(|name| format!(r#"<option value="{}">"#, escape(name)))
        .collect();
    let docs: String = [("SDS", "product.sds"), ("CoA", "product.coa"), ("TDS", "quote.doc_tds")]
        .iter()
        .map(|(value, key)| {
            let checked = if form.required_docs.iter().any(|d| d == value) { " checked" } else { "" };
            format!(
                r#"<label class="check"><input type="checkbox" name="required_docs" value="{value}"{checked}>{}</label>"#,
                escape(ctx.t(key))
            )
        })
        .collect();

    let body = format!(
        r#"<section class="form-page">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<p>{description}</p>
{banner}
<form method="post" action="{action}" class="quote-form">
<input type="hidden" name="locale" value="{locale}">
<fieldset><legend>{contact_title}</legend>
{person}
{phone}
</fieldset>
<fieldset><legend>{product_title}</legend>
<label>{category_label}<select name="category">{categories}</select></label>
<label>{product_label}<input type="text" name="product" list="product-names" value="{product}"></label>
<datalist id="product-names">{suggestions}</datalist>
{cas}
{application}
{quantity}
<label>{unit_label}<select name="quantity_unit">{units}</select></label>
{packaging}
<label>{frequency_label}<select name="frequency">{frequencies}</select></label>
</fieldset>
<fieldset><legend>{delivery_title}</legend>
{delivery_date}
{country}
{city}
<label>{address_label}<textarea name="address" rows="2">{address}</textarea></label>
</fieldset>
<fieldset><legend>{docs_title}</legend>{docs}</fieldset>
<label>{notes_label}<textarea name="notes" rows="5">{notes}</textarea></label>
<button type="submit" class="button">{submit}</button>
</form>
</section>"#,
        title = escape(ctx.t("quote.title")),
        subtitle = escape(ctx.t("quote.subtitle")),
        description = escape(ctx.t("quote.description")),
        banner = banner.map(Banner::render).unwrap_or_default(),
        action = ctx.href("/quote"),
        locale = ctx.locale,
        contact_title = escape(ctx.t("quote.contact_title")),
        person = contact_person(ctx, &form.full_name, &form.email, &form.company),
        phone = text_input(ctx.t("form.phone"), "phone", &form.phone, "tel", false),
        product_title = escape(ctx.t("quote.product_title")),
        category_label = escape(ctx.t("quote.category")),
        product_label = escape(ctx.t("quote.product")),
        product = escape(&form.product),
        cas = text_input(ctx.t("quote.cas"), "cas", &form.cas, "text", false),
        application = text_input(ctx.t("quote.application"), "application", &form.application, "text", false),
        quantity = text_input(ctx.t("quote.quantity"), "quantity", &form.quantity, "number", false),
        unit_label = escape(ctx.t("quote.quantity_unit")),
        packaging = text_input(ctx.t("quote.packaging"), "packaging", &form.packaging, "text", false),
        frequency_label = escape(ctx.t("quote.frequency")),
        delivery_title = escape(ctx.t("quote.delivery_title")),
        delivery_date = text_input(ctx.t("quote.delivery_date"), "delivery_date", &form.delivery_date, "date", false),
        country = text_input(ctx.t("quote.country"), "country", &form.country, "text", false),
        city = text_input(ctx.t("quote.city"), "city", &form.city, "text", false),
        address_label = escape(ctx.t("quote.address")),
        address = escape(&form.address),
        docs_title = escape(ctx.t("quote.docs")),
        notes_label = escape(ctx.t("quote.notes")),
        notes = escape(&form.notes),
        submit = escape(ctx.t("quote.submit")),
    );

    layout::render(ctx, &meta, &body)
}

pub fn render_contact(ctx: &PageContext, form: &ContactRequest, sales_email: &str, banner: Option<&Banner>) -> String {
    let meta = PageMeta::from_keys(ctx, "contact.meta_title", "contact.meta_description");
    let inquiries = options(
        &form.inquiry,
        INQUIRY_OPTIONS.iter().map(|(v, k)| (v.to_string(), ctx.t(k).to_string())),
    );

    let body = format!(
        r#"<section class="form-page">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
{banner}
<form method="post" action="{action}" class="contact-form">
<input type="hidden" name="locale" value="{locale}">
{person}
<label>{inquiry_label}<select name="inquiry">{inquiries}</select></label>
<label>{message_label}<textarea name="message" rows="6" required>{message}</textarea></label>
<button type="submit" class="button">{submit}</button>
</form>
<aside class="card sales-desk">
<h3>{desk}</h3>
<a href="mailto:{email}">{email}</a>
<p>{hours}</p>
</aside>
</section>"#,
        title = escape(ctx.t("contact.title")),
        subtitle = escape(ctx.t("contact.subtitle")),
        banner = banner.map(Banner::render).unwrap_or_default(),
        action = ctx.href("/contact"),
        locale = ctx.locale,
        person = contact_person(ctx, &form.full_name, &form.email, &form.company),
        inquiry_label = escape(ctx.t("contact.inquiry")),
        message_label = escape(ctx.t("contact.message")),
        message = escape(&form.message),
        submit = escape(ctx.t("contact.submit")),
        desk = escape(ctx.t("contact.sales_desk")),
        email = escape(sales_email),
        hours = escape(ctx.t("contact.hours")),
    );

    layout::render(ctx, &meta, &body)
}
