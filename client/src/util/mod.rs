//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions, timing and storage away from
//! page and component code so they can be tested natively.

pub mod auth;
pub mod deadline;
pub mod nav;
pub mod pagination;
pub mod storage;
