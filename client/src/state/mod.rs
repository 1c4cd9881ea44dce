//! Client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the signed-in user and its durable copy; `resources` holds
//! per-view list state for the resource pages.

pub mod resources;
pub mod session;
