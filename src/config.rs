// src/config.rs
use std::net::IpAddr;
use std::path::PathBuf;

use crate::models::locale::Locale;

pub const DEFAULT_SITE_URL: &str = "https://chemdist-global.com";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_SALES_EMAIL: &str = "sales@chemdist-global.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub site_url: String,
    pub data_dir: PathBuf,
    pub sheets: Option<SheetsConfig>,
    pub relay: RelayConfig,
}

/// Service-account access to the product spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub sheet_id: String,
    pub client_email: String,
    pub private_key: String,
    pub sheet_en: String,
    pub sheet_ar: String,
    pub token_url: String,
    pub api_url: String,
}

impl SheetsConfig {
    pub fn sheet_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.sheet_en,
            Locale::Ar => &self.sheet_ar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_url: String,
    pub service_id: String,
    pub quote_template_id: String,
    pub contact_template_id: String,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub sales_email: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            service_id: "service_default".to_string(),
            quote_template_id: "template_default".to_string(),
            contact_template_id: "template_default".to_string(),
            public_key: None,
            private_key: None,
            sales_email: DEFAULT_SALES_EMAIL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            site_url: DEFAULT_SITE_URL.to_string(),
            data_dir: PathBuf::from("data"),
            sheets: None,
            relay: RelayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment. Call `dotenvy::dotenv()` first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("HOST")
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);
        let port = get("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let sheets = match (
            get("GOOGLE_SHEET_ID"),
            get("GOOGLE_CLIENT_EMAIL"),
            get("GOOGLE_PRIVATE_KEY"),
        ) {
            (Some(sheet_id), Some(client_email), Some(private_key)) => Some(SheetsConfig {
                sheet_id,
                client_email,
                private_key,
                sheet_en: get("GOOGLE_SHEET_EN").unwrap_or_else(|| "Sheet2".to_string()),
                sheet_ar: get("GOOGLE_SHEET_AR").unwrap_or_else(|| "Sheet1".to_string()),
                token_url: get("GOOGLE_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
                api_url: get("GOOGLE_SHEETS_API_URL")
                    .unwrap_or_else(|| DEFAULT_SHEETS_API_URL.to_string()),
            }),
            _ => None,
        };

        let relay_defaults = RelayConfig::default();
        let relay = RelayConfig {
            api_url: get("EMAILJS_API_URL").unwrap_or(relay_defaults.api_url),
            service_id: get("EMAILJS_SERVICE_ID").unwrap_or(relay_defaults.service_id),
            quote_template_id: get("EMAILJS_QUOTE_TEMPLATE_ID")
                .unwrap_or(relay_defaults.quote_template_id),
            contact_template_id: get("EMAILJS_CONTACT_TEMPLATE_ID")
                .unwrap_or(relay_defaults.contact_template_id),
            public_key: get("EMAILJS_PUBLIC_KEY"),
            private_key: get("EMAILJS_PRIVATE_KEY"),
            sales_email: get("SALES_EMAIL").unwrap_or(relay_defaults.sales_email),
        };

        Self {
            host,
            port,
            site_url: get("SITE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            data_dir: get("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            sheets,
            relay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn sheets_require_all_three_credentials() {
        let config = config_from(&[("GOOGLE_SHEET_ID", "abc"), ("GOOGLE_CLIENT_EMAIL", "svc@x")]);
        assert!(config.sheets.is_none());

        let config = config_from(&[
            ("GOOGLE_SHEET_ID", "abc"),
            ("GOOGLE_CLIENT_EMAIL", "svc@x"),
            ("GOOGLE_PRIVATE_KEY", "key"),
        ]);
        let sheets = config.sheets.expect("sheets configured");
        assert_eq!(sheets.sheet_name(Locale::Ar), "Sheet1");
        assert_eq!(sheets.sheet_name(Locale::En), "Sheet2");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[
            ("GOOGLE_SHEET_ID", "abc"),
            ("GOOGLE_CLIENT_EMAIL", "svc@x"),
            ("GOOGLE_PRIVATE_KEY", "  "),
            ("PORT", ""),
        ]);
        assert!(config.sheets.is_none());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn site_url_drops_trailing_slash() {
        let config = config_from(&[("SITE_URL", "https://example.test/"), ("PORT", "8080")]);
        assert_eq!(config.site_url, "https://example.test");
        assert_eq!(config.port, 8080);
        assert_eq!(config.relay.service_id, "service_default");
    }
}
