// src/relay/templates.rs
use std::collections::BTreeMap;

use crate::dtos::inquiry::{ContactRequest, QuoteRequest};
use crate::models::locale::Locale;

pub type TemplateParams = BTreeMap<&'static str, String>;

/// Template variables for the quote email.
pub fn quote_params(quote: &QuoteRequest, locale: Locale) -> TemplateParams {
    let fields: [(&'static str, &str); 17] = [
        ("from_email", &quote.email),
        ("from_name", &quote.full_name),
        ("company_name", &quote.company),
        ("phone", &quote.phone),
        ("product_name", &quote.product),
        ("product_category", &quote.category),
        ("cas_number", &quote.cas),
        ("application", &quote.application),
        ("quantity", &quote.quantity),
        ("quantity_unit", &quote.quantity_unit),
        ("packaging", &quote.packaging),
        ("frequency", &quote.frequency),
        ("delivery_date", &quote.delivery_date),
        ("country", &quote.country),
        ("city", &quote.city),
        ("address", &quote.address),
        ("notes", &quote.notes),
    ];

    let mut params: TemplateParams = fields
        .into_iter()
        .map(|(name, value)| (name, value.trim().to_string()))
        .collect();
    params.insert("required_docs", quote.required_docs.join(", "));
    params.insert("locale", locale.code().to_string());
    params
}

/// Template variables for the contact email.
pub fn contact_params(contact: &ContactRequest, to_email: &str, locale: Locale) -> TemplateParams {
    let mut params = TemplateParams::new();
    params.insert("to_email", to_email.to_string());
    params.insert("from_name", contact.full_name.trim().to_string());
    params.insert("from_email", contact.email.trim().to_string());
    params.insert("company", contact.company.trim().to_string());
    params.insert("inquiry_type", contact.inquiry.clone());
    params.insert("message", contact.message.clone());
    params.insert("locale", locale.code().to_string());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_params_use_relay_names() {
        let quote = QuoteRequest {
            full_name: "Omar Said".into(),
            email: "omar@example.com".into(),
            product: "C5 Hydrocarbon Resin".into(),
            cas: "64742-16-1".into(),
            required_docs: vec!["SDS".into(), "CoA".into()],
            ..Default::default()
        };
        let params = quote_params(&quote, Locale::Ar);
        assert_eq!(params["from_name"], "Omar Said");
        assert_eq!(params["product_name"], "C5 Hydrocarbon Resin");
        assert_eq!(params["cas_number"], "64742-16-1");
        assert_eq!(params["required_docs"], "SDS, CoA");
        assert_eq!(params["locale"], "ar");
        assert_eq!(params["notes"], "");
        assert_eq!(params.len(), 19);
    }

    #[test]
    fn contact_params_address_the_sales_desk() {
        let contact = ContactRequest {
            full_name: "Mia".into(),
            email: "mia@example.com".into(),
            message: "Need TiO2 pricing".into(),
            ..Default::default()
        };
        let params = contact_params(&contact, "sales@chemdist-global.com", Locale::En);
        assert_eq!(params["to_email"], "sales@chemdist-global.com");
        assert_eq!(params["inquiry_type"], "technical");
        assert_eq!(params["locale"], "en");
    }
}
