//! HTTP transport seam.
//!
//! Client-side (hydrate): `gloo-net` fetch with an `AbortController` so a
//! dropped request is cancelled in the browser too.
//! Native (CLI, tests): `reqwest`.
//!
//! Both return the status and the raw body text; interpreting the body is
//! left to callers so malformed payloads never fail at this layer.

#![allow(async_fn_in_trait)]

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A single JSON API request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: None }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: Some(body) }
    }

    pub fn patch_json(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Patch, url: url.into(), bearer: None, body: Some(body) }
    }

    /// Attach `Authorization: Bearer {token}`.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Status code plus the full body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, falling back to an empty object for empty or
    /// non-JSON bodies.
    pub fn json_or_empty(&self) -> Value {
        if self.body.trim().is_empty() {
            return Value::Object(serde_json::Map::new());
        }
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not reach the server (network/CORS): {0}")]
    Unreachable(String),
    #[error("could not build request: {0}")]
    Request(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

/// Sends one request and yields the raw response.
pub trait HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

/// Aborts the underlying fetch when dropped. Aborting a settled fetch is a
/// no-op.
#[cfg(feature = "hydrate")]
struct AbortOnDrop(Option<web_sys::AbortController>);

#[cfg(feature = "hydrate")]
impl AbortOnDrop {
    fn new() -> Self {
        Self(web_sys::AbortController::new().ok())
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.0.as_ref().map(web_sys::AbortController::signal)
    }
}

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = &self.0 {
            controller.abort();
        }
    }
}

#[cfg(feature = "hydrate")]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        use gloo_net::http::Request;

        let abort = AbortOnDrop::new();
        let signal = abort.signal();
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let mut builder = builder
            .header("Accept", "application/json")
            .abort_signal(signal.as_ref());
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Unreachable(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Native transport over a shared `reqwest` client.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self
            .client
            .request(method, &request.url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::Request(e.to_string())
            } else {
                TransportError::Unreachable(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
