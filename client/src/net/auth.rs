//! Login exchange: credentials in, session out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGateway::login` is the only writer of a fresh session. It posts the
//! credentials, waits at most `timeout`, reads the body as text, parses it
//! leniently, validates the required fields and then commits all four
//! session fields at once.
//!
//! ERROR HANDLING
//! ==============
//! Every failure clears the session before the error is returned, so a
//! failed attempt never leaves an earlier or partial session active.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use serde_json::Value;

use super::transport::{ApiRequest, HttpTransport, RawResponse, TransportError};
use super::types::json_id;
use crate::config::ApiBase;
use crate::state::session::{Role, SessionStore};
use crate::util::deadline::with_deadline;

/// Login endpoint, relative to the API base.
pub const LOGIN_ENDPOINT: &str = "/auth/login";

/// How long a login attempt may wait for a response.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("could not reach the server (network/CORS): {0}")]
    NetworkUnreachable(String),
    #[error("login timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("invalid server response (missing token or usuario)")]
    InvalidServerResponse,
    #[error("unknown login error: {0}")]
    Unknown(String),
}

impl LoginError {
    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkUnreachable(_) => "network_unreachable",
            Self::Timeout(_) => "timeout",
            Self::Http { .. } => "http_error",
            Self::InvalidServerResponse => "invalid_server_response",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl From<TransportError> for LoginError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Unreachable(detail) => Self::NetworkUnreachable(detail),
            TransportError::Request(detail) | TransportError::Body(detail) => Self::Unknown(detail),
        }
    }
}

fn login_failed_message(status: u16) -> String {
    format!("login failed with status {status}")
}

/// Validated fields of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub role: Option<Role>,
    pub user_id: String,
    pub display_name: Option<String>,
}

/// Interpret a login response.
///
/// Non-2xx statuses fail with the server `message` when it is a non-empty
/// string. A 2xx response must carry a non-empty `token` and a `usuario`
/// object with an `id`; the role is normalized and the id coerced to a
/// string.
///
/// # Errors
///
/// Returns [`LoginError::Http`] or [`LoginError::InvalidServerResponse`].
pub fn parse_login_response(response: &RawResponse) -> Result<LoginGrant, LoginError> {
    let body = response.json_or_empty();

    if !response.is_success() {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(|| login_failed_message(response.status), ToOwned::to_owned);
        return Err(LoginError::Http { status: response.status, message });
    }

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or(LoginError::InvalidServerResponse)?;
    let usuario = body
        .get("usuario")
        .filter(|u| u.is_object())
        .ok_or(LoginError::InvalidServerResponse)?;
    let user_id = usuario
        .get("id")
        .and_then(json_id)
        .ok_or(LoginError::InvalidServerResponse)?;

    Ok(LoginGrant {
        token: token.to_owned(),
        role: usuario.get("rol").and_then(Role::from_json),
        user_id,
        display_name: usuario
            .get("nombre")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(ToOwned::to_owned),
    })
}

/// Performs logins against the backend and owns session transitions.
#[derive(Debug)]
pub struct AuthGateway<T> {
    transport: T,
    api: ApiBase,
    session: SessionStore,
    timeout: Duration,
}

impl<T: HttpTransport> AuthGateway<T> {
    pub fn new(transport: T, api: ApiBase, session: SessionStore) -> Self {
        Self { transport, api, session, timeout: LOGIN_TIMEOUT }
    }

    /// Override the response deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] for transport failures, the deadline,
    /// rejected credentials or an unusable response. The session is empty
    /// whenever an error is returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        let url = self.api.url(LOGIN_ENDPOINT);
        leptos::logging::log!("POST {url}");

        match self.exchange(&url, email, password).await {
            Ok(grant) => {
                self.session.set_session(
                    &grant.token,
                    grant.role,
                    &grant.user_id,
                    grant.display_name.as_deref(),
                );
                Ok(())
            }
            Err(err) => {
                self.session.clear_session();
                match &err {
                    LoginError::Http { status, .. } => {
                        leptos::logging::warn!("login rejected: kind={} status={status}", err.kind());
                    }
                    _ => leptos::logging::warn!("login failed: kind={} error={err}", err.kind()),
                }
                Err(err)
            }
        }
    }

    async fn exchange(&self, url: &str, email: &str, password: &str) -> Result<LoginGrant, LoginError> {
        let request = ApiRequest::post_json(url, serde_json::json!({ "email": email, "password": password }));
        let response = with_deadline(self.timeout, self.transport.send(request))
            .await
            .map_err(|elapsed| LoginError::Timeout(elapsed.0))??;
        parse_login_response(&response)
    }

    /// End the session.
    pub fn logout(&self) {
        self.session.clear_session();
    }
}
