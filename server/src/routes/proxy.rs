//! Same-origin reverse proxy to the backend REST API.
//!
//! `/api/{path}?{query}` is forwarded to `{backend}/{path}?{query}` with the
//! method, body and the `Authorization`, `Content-Type` and `Accept`
//! headers. The upstream status and body are returned untouched so the
//! client sees exactly what the backend said.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend proxy is not configured")]
    Disabled,
    #[error("backend did not answer in time")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string() });
        (self.status(), [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
    }
}

/// Join the backend base, the captured path and the original query.
pub(crate) fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", backend.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let backend = state.backend.as_deref().ok_or(ProxyError::Disabled)?;
    let url = upstream_url(backend, &path, uri.query());
    tracing::debug!(%method, %url, "proxying request");

    let mut request = state.http.request(method, &url).timeout(state.proxy_timeout);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        if e.is_timeout() {
            tracing::warn!(%url, "backend timed out");
            ProxyError::Timeout
        } else {
            tracing::warn!(%url, error = %e, "backend unreachable");
            ProxyError::Upstream(e.to_string())
        }
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        if e.is_timeout() { ProxyError::Timeout } else { ProxyError::Upstream(e.to_string()) }
    })?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
