//! List state for the resource views.
//!
//! DESIGN
//! ======
//! One `ListState` per view, wrapped in an `RwSignal` by the page. Results
//! are applied whole so a failed reload never shows rows from an older
//! query next to a new error.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use crate::net::api::ApiError;
use crate::net::types::ListPage;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), total: 0, loading: false, error: None }
    }
}

impl<T> ListState<T> {
    /// Mark a request as in flight, keeping the current rows visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, result: Result<ListPage<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.rows = page.rows;
                self.total = page.total;
                self.error = None;
            }
            Err(err) => {
                self.rows.clear();
                self.total = 0;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}

/// Outcome banner for one-shot actions such as a review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Failure(m) => m,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
