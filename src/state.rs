//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the catalog API and the API origin.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Catalog API origin without a trailing slash.
    pub catalog_api_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the builder error if the HTTP client cannot be created.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, catalog_api_url: Arc::from(config.catalog_api_url.as_str()) })
    }
}
