//! Authenticated REST helpers for the resource views.
//!
//! Every request carries `Authorization: Bearer {token}` from the session
//! store. A `401` means the session is no longer valid: the store is cleared,
//! which makes the route guards send the user back to `/login`.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; bodies are decoded leniently so a
//! malformed payload degrades to an empty page rather than an error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde_json::Value;

use super::transport::{ApiRequest, HttpTransport, RawResponse};
use super::types::{Estado, Expediente, Indicio, ListPage, Usuario, parse_list_page, parse_single};
use crate::config::ApiBase;
use crate::state::session::SessionStore;
use crate::util::deadline::with_deadline;

/// Rows per page for every list view.
pub const PAGE_SIZE: u32 = 10;

/// Deadline for resource requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The backend routes reads and writes under differently-cased prefixes.
const EXPEDIENTES_READ: &str = "/Expedientes";
const EXPEDIENTES_WRITE: &str = "/expedientes";
const INDICIOS_SEGMENT: &str = "Indicios";
const USUARIOS: &str = "/usuarios";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("session expired, sign in again")]
    Unauthorized,
    #[error("not signed in")]
    MissingToken,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("the server did not answer in time")]
    Timeout,
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Whether the user has to sign in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::MissingToken)
    }
}

/// Map a raw response to its JSON body or an [`ApiError`].
///
/// # Errors
///
/// `401` yields [`ApiError::Unauthorized`]; any other non-2xx yields
/// [`ApiError::Http`] with the server `message` or `fallback`.
pub fn interpret_response(response: &RawResponse, fallback: &str) -> Result<Value, ApiError> {
    let body = response.json_or_empty();
    if response.status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !response.is_success() {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned();
        return Err(ApiError::Http { status: response.status, message });
    }
    Ok(body)
}

/// Paging and filter parameters shared by the list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub estado: Option<Estado>,
    pub activo: Option<bool>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZE, search: String::new(), estado: None, activo: None }
    }
}

impl ListQuery {
    /// Encode as a query string. `cache_buster` becomes the `_` parameter.
    pub fn to_query_string(&self, cache_buster: u64) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            ("page", self.page.max(1).to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("q", search.to_owned()));
        }
        if let Some(estado) = self.estado {
            pairs.push(("estado", estado.as_str().to_owned()));
        }
        if let Some(activo) = self.activo {
            pairs.push(("activo", activo.to_string()));
        }
        pairs.push(("_", cache_buster.to_string()));
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

/// A coordinator's verdict on an expediente.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { justificacion: String },
}

impl ReviewDecision {
    /// Build a rejection; the justification is mandatory.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when `justificacion` is blank.
    pub fn reject(justificacion: &str) -> Result<Self, &'static str> {
        let justificacion = justificacion.trim();
        if justificacion.is_empty() {
            return Err("La justificación es obligatoria para rechazar.");
        }
        Ok(Self::Reject { justificacion: justificacion.to_owned() })
    }

    pub fn estado(&self) -> Estado {
        match self {
            Self::Approve => Estado::Aprobado,
            Self::Reject { .. } => Estado::Rechazado,
        }
    }

    pub fn body(&self) -> Value {
        let justificacion = match self {
            Self::Approve => "",
            Self::Reject { justificacion } => justificacion.as_str(),
        };
        serde_json::json!({ "estado": self.estado().as_str(), "justificacion": justificacion })
    }
}

fn cache_buster() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Typed client for the resource endpoints.
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
    api: ApiBase,
    session: SessionStore,
    timeout: Duration,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, api: ApiBase, session: SessionStore) -> Self {
        Self { transport, api, session, timeout: REQUEST_TIMEOUT }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `GET /Expedientes` with paging and filters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_expedientes(&self, query: &ListQuery) -> Result<ListPage<Expediente>, ApiError> {
        let path = format!("{EXPEDIENTES_READ}?{}", query.to_query_string(cache_buster()));
        let body = self.send(ApiRequest::get(self.api.url(&path)), "No se pudo listar").await?;
        Ok(parse_list_page(&body))
    }

    /// `GET /Expedientes/{codigo}`; a `404` is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_expediente(&self, codigo: &str) -> Result<Option<Expediente>, ApiError> {
        let path = format!("{EXPEDIENTES_READ}/{}?_={}", encode(codigo.trim()), cache_buster());
        match self
            .send(ApiRequest::get(self.api.url(&path)), "No se pudo obtener el expediente.")
            .await
        {
            Ok(body) => Ok(parse_single(&body)),
            Err(ApiError::Http { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `GET /Expedientes/{codigo}/Indicios` with paging and filters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_indicios(&self, expediente: &str, query: &ListQuery) -> Result<ListPage<Indicio>, ApiError> {
        let path = format!(
            "{EXPEDIENTES_READ}/{}/{INDICIOS_SEGMENT}?{}",
            encode(expediente.trim()),
            query.to_query_string(cache_buster())
        );
        let body = self
            .send(ApiRequest::get(self.api.url(&path)), "No se pudo listar indicios")
            .await?;
        Ok(parse_list_page(&body))
    }

    /// `GET /usuarios` with paging and filters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_usuarios(&self, query: &ListQuery) -> Result<ListPage<Usuario>, ApiError> {
        let path = format!("{USUARIOS}?{}", query.to_query_string(cache_buster()));
        let body = self.send(ApiRequest::get(self.api.url(&path)), "No se pudo listar").await?;
        Ok(parse_list_page(&body))
    }

    /// `PATCH /expedientes/{codigo}/estado`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn review_expediente(&self, codigo: &str, decision: &ReviewDecision) -> Result<(), ApiError> {
        let path = format!("{EXPEDIENTES_WRITE}/{}/estado", encode(codigo.trim()));
        let fallback = match decision {
            ReviewDecision::Approve => "No se pudo aprobar.",
            ReviewDecision::Reject { .. } => "No se pudo rechazar.",
        };
        self.send(ApiRequest::patch_json(self.api.url(&path), decision.body()), fallback)
            .await
            .map(|_| ())
    }

    async fn send(&self, request: ApiRequest, fallback: &str) -> Result<Value, ApiError> {
        let session = self.session.get_session();
        let token = session.bearer().ok_or(ApiError::MissingToken)?;
        let request = request.with_bearer(token);

        let response = with_deadline(self.timeout, self.transport.send(request))
            .await
            .map_err(|_| ApiError::Timeout)?
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let result = interpret_response(&response, fallback);
        if matches!(result, Err(ApiError::Unauthorized)) {
            leptos::logging::warn!("request rejected with 401, clearing session");
            self.session.clear_session();
        }
        result
    }
}
