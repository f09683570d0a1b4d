// src/sources/sheets.rs
//! Google Sheets product source.
//!
//! Authenticates as a service account (RS256 JWT assertion exchanged for a
//! bearer token), reads columns `A:J` of the locale's sheet, and turns rows
//! into products using the first row as field names.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use super::SourceError;
use crate::config::SheetsConfig;
use crate::models::locale::Locale;
use crate::models::product::Product;

const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const COLUMNS: &str = "A:J";
const ASSERTION_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    config: Arc<SheetsConfig>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsSource {
    pub fn new(config: SheetsConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    #[instrument(skip(self), fields(sheet = %self.config.sheet_name(locale)))]
    pub async fn fetch(&self, locale: Locale) -> Result<Vec<Product>, SourceError> {
        let token = self.access_token().await?;
        let range = format!("{}!{}", self.config.sheet_name(locale), COLUMNS);
        let url = self.values_url(&range)?;
        debug!(%url, "Fetching sheet values");

        let body: ValueRange = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let rows = body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        Ok(rows_to_products(rows))
    }

    async fn access_token(&self) -> Result<String, SourceError> {
        let pem = clean_private_key(&self.config.private_key);
        let key = EncodingKey::from_rsa_pem(pem.as_bytes())?;

        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.config.client_email,
            scope: SCOPE,
            aud: &self.config.token_url,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)?;

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Auth(format!("token endpoint returned {status}: {body}")));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    fn values_url(&self, range: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| SourceError::Config(format!("bad Sheets API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Config("Sheets API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.config.sheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

/// Undo the quoting and newline escaping env files tend to apply to PEM keys.
pub fn clean_private_key(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let trimmed = trimmed
        .strip_suffix(['"', '\''])
        .unwrap_or(trimmed);
    trimmed.replace(r"\\n", "\n").replace(r"\n", "\n")
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Converts sheet rows into products. The first row names the fields.
pub fn rows_to_products(rows: Vec<Vec<String>>) -> Vec<Product> {
    let mut rows = rows.into_iter();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    rows.enumerate()
        .filter_map(|(index, row)| {
            let position = index as i64 + 1;
            let mut record = Map::new();
            for (column, header) in headers.iter().enumerate() {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                let value = match header.as_str() {
                    "id" => Value::from(parse_id(cell).unwrap_or(position)),
                    "specifications" => Value::Object(
                        parse_specifications(cell)
                            .into_iter()
                            .map(|(k, v)| (k, Value::String(v)))
                            .collect(),
                    ),
                    _ => Value::String(cell.to_string()),
                };
                record.insert(header.clone(), value);
            }
            record.entry("id").or_insert_with(|| Value::from(position));

            match serde_json::from_value::<Product>(Value::Object(record)) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(row = position, error = %e, "Skipping unreadable sheet row");
                    None
                }
            }
        })
        .collect()
}

/// Leading-integer parse; zero or garbage yields `None`.
fn parse_id(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    let digits_end = cell
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(cell.len());
    cell[..digits_end].parse::<i64>().ok().filter(|id| *id != 0)
}

/// Best-effort JSON object parse; anything else is an empty mapping.
pub fn parse_specifications(cell: &str) -> BTreeMap<String, String> {
    if cell.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str::<Value>(cell) {
        Ok(Value::Object(map)) => map.into_iter().map(|(k, v)| (k, cell_text(v))).collect(),
        _ => BTreeMap::new(),
    }
}
