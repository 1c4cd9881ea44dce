//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `auth` performs the login exchange, `api`
//! wraps the authenticated resource endpoints, and `types` defines the
//! backend records.

pub mod api;
pub mod auth;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
