//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session store from Leptos context; pages compose them
//! around route-specific content.

pub mod guards;
pub mod navbar;
pub mod pagination;
pub mod search_bar;
