// src/relay/mod.rs
//! Outbound form delivery through the EmailJS REST API.
//!
//! One POST per submission. Nothing is retried or stored; the caller only
//! learns whether the relay accepted the message.

pub mod templates;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::config::RelayConfig;
use crate::dtos::inquiry::{ContactRequest, QuoteRequest};
use crate::models::locale::Locale;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("email relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone)]
pub struct EmailRelay {
    config: Arc<RelayConfig>,
    client: reqwest::Client,
}

impl EmailRelay {
    pub fn new(config: RelayConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.public_key.is_some()
    }

    #[instrument(skip(self, quote), fields(product = %quote.product))]
    pub async fn send_quote(&self, quote: &QuoteRequest, locale: Locale) -> Result<(), RelayError> {
        let params = templates::quote_params(quote, locale);
        self.send(&self.config.quote_template_id, &params).await
    }

    #[instrument(skip(self, contact), fields(inquiry = %contact.inquiry))]
    pub async fn send_contact(&self, contact: &ContactRequest, locale: Locale) -> Result<(), RelayError> {
        let params = templates::contact_params(contact, &self.config.sales_email, locale);
        self.send(&self.config.contact_template_id, &params).await
    }

    async fn send(
        &self,
        template_id: &str,
        params: &BTreeMap<&'static str, String>,
    ) -> Result<(), RelayError> {
        let Some(public_key) = self.config.public_key.as_deref() else {
            warn!("EMAILJS_PUBLIC_KEY not set, dropping submission");
            return Err(RelayError::NotConfigured);
        };

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };

        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), SEND_PATH);
        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status: status.as_u16(), body });
        }

        info!(template_id, "Submission relayed");
        Ok(())
    }
}
