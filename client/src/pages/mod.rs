//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Network work only runs in the browser; the server render
//! shows the initial, empty state.

pub mod expedientes;
pub mod home;
pub mod indicios;
pub mod login;
pub mod revisar;
pub mod usuarios;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ApiBase;
#[cfg(feature = "hydrate")]
use crate::net::api::{ApiClient, ApiError};
#[cfg(feature = "hydrate")]
use crate::net::transport::BrowserTransport;
#[cfg(feature = "hydrate")]
use crate::net::types::ListPage;
#[cfg(feature = "hydrate")]
use crate::state::resources::ListState;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Browser API client bound to `store`.
#[cfg(feature = "hydrate")]
pub(crate) fn api_client(store: SessionStore) -> ApiClient<BrowserTransport> {
    ApiClient::new(BrowserTransport, ApiBase::from_build(), store)
}

/// Run a list request and apply its result to `state`.
#[cfg(feature = "hydrate")]
pub(crate) fn spawn_list_load<T, Fut>(state: RwSignal<ListState<T>>, request: Fut)
where
    T: Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<ListPage<T>, ApiError>> + 'static,
{
    state.update(ListState::begin);
    leptos::task::spawn_local(async move {
        let result = request.await;
        if let Err(e) = &result {
            leptos::logging::warn!("list request failed: {e}");
        }
        state.update(|s| s.apply(result));
    });
}

/// Table cell text for optional values.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("—").to_owned()
}

pub(crate) fn activo_label(activo: bool) -> &'static str {
    if activo { "Sí" } else { "No" }
}
