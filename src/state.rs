// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::relay::EmailRelay;
use crate::sources::ProductSource;

#[derive(Debug, Clone)]
pub struct AppState {
    pub products: ProductSource,
    pub relay: EmailRelay,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: AppConfig, client: reqwest::Client) -> Self {
        let products = ProductSource::from_config(&config, client.clone());
        let relay = EmailRelay::new(config.relay.clone(), client);
        Self {
            products,
            relay,
            config: Arc::new(config),
        }
    }
}
