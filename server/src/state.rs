//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound HTTP client and the proxy target; the session itself
//! lives entirely in the browser.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL; `None` disables `/api` forwarding.
    pub backend: Option<Arc<str>>,
    pub proxy_timeout: Duration,
}

impl AppState {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend: config.backend_url.as_deref().map(Arc::from),
            proxy_timeout: config.proxy_timeout,
        }
    }
}
