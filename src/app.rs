//! Admin Dashboard App
//!
//! Root shell hosting the dashboard view.

use leptos::prelude::*;

use crate::components::{Dashboard, RootShell};
use crate::config::ApiConfig;
use crate::context::DashboardContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[APP] Backend at {}", config.base_url());
    provide_context(DashboardContext::new(config));

    view! {
        <RootShell>
            <Dashboard />
        </RootShell>
    }
}
