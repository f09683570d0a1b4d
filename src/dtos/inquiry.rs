// src/dtos/inquiry.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

fn default_inquiry() -> String {
    "technical".to_string()
}

/// Quote request as posted by the quote form or the JSON API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuoteRequest {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cas: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub quantity_unit: String,
    #[serde(default)]
    pub packaging: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub delivery_date: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub required_docs: Vec<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl QuoteRequest {
    /// Builds a request from urlencoded form pairs; repeated `required_docs` keys accumulate.
    pub fn from_form_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut quote = QuoteRequest::default();
        for (key, value) in pairs {
            let value = value.into();
            let slot = match key.as_ref() {
                "fullName" => &mut quote.full_name,
                "email" => &mut quote.email,
                "company" => &mut quote.company,
                "phone" => &mut quote.phone,
                "product" => &mut quote.product,
                "category" => &mut quote.category,
                "cas" => &mut quote.cas,
                "application" => &mut quote.application,
                "quantity" => &mut quote.quantity,
                "quantity_unit" => &mut quote.quantity_unit,
                "packaging" => &mut quote.packaging,
                "frequency" => &mut quote.frequency,
                "delivery_date" => &mut quote.delivery_date,
                "country" => &mut quote.country,
                "city" => &mut quote.city,
                "address" => &mut quote.address,
                "notes" => &mut quote.notes,
                "required_docs" => {
                    if !value.trim().is_empty() {
                        quote.required_docs.push(value);
                    }
                    continue;
                }
                _ => continue,
            };
            *slot = value;
        }
        quote
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_contact_person(&self.full_name, &self.email)
    }
}

/// General enquiry from the contact page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactRequest {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default = "default_inquiry")]
    pub inquiry: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for ContactRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            company: String::new(),
            inquiry: default_inquiry(),
            message: String::new(),
            locale: None,
        }
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_contact_person(&self.full_name, &self.email)?;
        if self.message.trim().is_empty() {
            return Err(AppError::validation("Message is required"));
        }
        Ok(())
    }
}

fn validate_contact_person(full_name: &str, email: &str) -> Result<(), AppError> {
    if full_name.trim().is_empty() {
        return Err(AppError::validation("Full name is required"));
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::validation("Email address is invalid")),
    }
}

/// Body returned by the submission endpoints on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub status: String,
}

impl SubmissionResponse {
    pub fn sent() -> Self {
        Self { status: "sent".to_string() }
    }
}
