//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::Fetched;
use crate::error::FetchError;
use crate::models::{Summary, Work};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Admin token typed by the user, sent verbatim as a bearer credential
    pub token: String,
    /// Latest summary; absent until a fetch succeeds
    pub summary: Option<Summary>,
    /// Latest works list, replaced wholesale
    pub works: Vec<Work>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Collapse every failure kind into "no data". Failures are only logged
/// at debug level; the view never shows them.
pub fn accept_outcome<T>(what: &str, outcome: Result<T, FetchError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("[DASHBOARD] {} fetch failed: {}", what, e);
            None
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Record a summary fetch outcome in the store
pub fn store_apply_summary(store: &DashboardStore, outcome: Result<Summary, FetchError>) {
    if let Some(summary) = accept_outcome("summary", outcome) {
        store.summary().set(Some(summary));
    }
}

/// Record a works fetch outcome in the store
pub fn store_apply_works(store: &DashboardStore, outcome: Result<Vec<Work>, FetchError>) {
    if let Some(works) = accept_outcome("works", outcome) {
        log::debug!("[DASHBOARD] Loaded {} works", works.len());
        store.works().set(works);
    }
}

/// Route a tagged fetch outcome to its field
pub fn store_apply(store: &DashboardStore, fetched: Fetched) {
    match fetched {
        Fetched::Summary(outcome) => store_apply_summary(store, outcome),
        Fetched::Works(outcome) => store_apply_works(store, outcome),
    }
}
