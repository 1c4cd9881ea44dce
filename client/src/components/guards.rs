//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over `util::auth`. Each re-evaluates on every change to the
//! session signal, so clearing the session (logout, a `401`) redirects the
//! current view immediately. Nothing renders until the store has been
//! restored from browser storage, which keeps the server render and the
//! first client render identical.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{Role, SessionStore};
use crate::util::auth::{GuardDecision, evaluate_route, require_auth, require_role};

fn render_decision(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => {
            leptos::logging::log!("guard redirect -> {path}");
            view! { <Redirect path=path/> }.into_any()
        }
    }
}

/// Render `children` only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    move || {
        if !store.is_restored() {
            return ().into_any();
        }
        render_decision(require_auth(&store.session()), &children)
    }
}

/// Render `children` only when the session role is in `allowed`. Nest inside
/// [`RequireAuth`].
#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    move || {
        if !store.is_restored() {
            return ().into_any();
        }
        render_decision(require_role(&store.session(), allowed), &children)
    }
}

/// Fallback for unmatched paths: landing page when signed in, login otherwise.
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let location = use_location();
    move || {
        if !store.is_restored() {
            return ().into_any();
        }
        match evaluate_route(&location.pathname.get(), &store.session()) {
            GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
            GuardDecision::Render => ().into_any(),
        }
    }
}
