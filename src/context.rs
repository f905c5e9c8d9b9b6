//! Application Context
//!
//! Startup configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::ApiConfig;

/// Dashboard-wide values provided via context
#[derive(Clone, Debug)]
pub struct DashboardContext {
    /// Backend address, fixed for the lifetime of the page
    pub config: ApiConfig,
}

impl DashboardContext {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Get the dashboard context; panics if the App did not provide it
pub fn use_dashboard_context() -> DashboardContext {
    expect_context::<DashboardContext>()
}
