//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard components in `components::guards` call these functions on
//! every render. Keeping the decisions pure lets them be tested without a
//! router or a browser.
//!
//! Client-side checks only shape navigation; the backend enforces access.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{Role, Session};

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated users without the required role are sent.
pub const LANDING_PATH: &str = "/";

pub const TECHNICIAN_ONLY: &[Role] = &[Role::Technician];
pub const COORDINATOR_ONLY: &[Role] = &[Role::Coordinator];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

pub fn auth_status(session: &Session) -> AuthStatus {
    if session.is_authenticated() {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Unauthenticated
    }
}

/// Authentication guard: render only with a non-empty token.
pub fn require_auth(session: &Session) -> GuardDecision {
    match auth_status(session) {
        AuthStatus::Authenticated => GuardDecision::Render,
        AuthStatus::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// Whether `role` is in `allowed`. An absent role or an empty set never
/// matches.
pub fn role_allowed(role: Option<Role>, allowed: &[Role]) -> bool {
    role.is_some_and(|role| allowed.contains(&role))
}

/// Role guard. Meant to run inside [`require_auth`]; on its own it only
/// checks membership.
pub fn require_role(session: &Session, allowed: &[Role]) -> GuardDecision {
    if role_allowed(session.role, allowed) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LANDING_PATH)
    }
}

/// A protected path and the roles it admits (`None` means any
/// authenticated user).
#[derive(Clone, Copy, Debug)]
pub struct RouteRule {
    pub path: &'static str,
    pub roles: Option<&'static [Role]>,
}

pub const PROTECTED_ROUTES: &[RouteRule] = &[
    RouteRule { path: "/", roles: None },
    RouteRule { path: "/expediente", roles: Some(TECHNICIAN_ONLY) },
    RouteRule { path: "/indicio", roles: Some(TECHNICIAN_ONLY) },
    RouteRule { path: "/revisar", roles: Some(COORDINATOR_ONLY) },
    RouteRule { path: "/usuarios", roles: Some(COORDINATOR_ONLY) },
];

/// Decide what happens when `session` navigates to `path`.
///
/// The login page always renders. Unknown paths fall back to the landing
/// route when signed in and to the login page otherwise.
pub fn evaluate_route(path: &str, session: &Session) -> GuardDecision {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    if path == LOGIN_PATH {
        return GuardDecision::Render;
    }
    let Some(rule) = PROTECTED_ROUTES.iter().find(|rule| rule.path == path) else {
        return match auth_status(session) {
            AuthStatus::Authenticated => GuardDecision::Redirect(LANDING_PATH),
            AuthStatus::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
        };
    };
    match require_auth(session) {
        GuardDecision::Render => match rule.roles {
            Some(allowed) => require_role(session, allowed),
            None => GuardDecision::Render,
        },
        redirect @ GuardDecision::Redirect(_) => redirect,
    }
}
