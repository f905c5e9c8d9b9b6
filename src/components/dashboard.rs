//! Dashboard View
//!
//! Owns the dashboard store and refetches summary and works whenever the
//! token changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, AdminClient, ApiRequest};
use crate::components::{SummaryTiles, TokenBox, WorkList};
use crate::config::ApiConfig;
use crate::context::use_dashboard_context;
use crate::store::{store_apply, DashboardState, DashboardStateStoreFields};

const TITLE: &str = "لوحة الإدارة";

/// Hand every request planned for `token` to `issue`, returning how many
/// were issued. Nothing is issued for an empty token.
pub fn refresh(config: &ApiConfig, token: &str, mut issue: impl FnMut(ApiRequest)) -> usize {
    let requests = api::plan_requests(config, token);
    let count = requests.len();
    if count > 0 {
        log::debug!("[DASHBOARD] Token changed, issuing {} requests", count);
    }
    for request in requests {
        issue(request);
    }
    count
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = Store::new(DashboardState::default());
    let client = AdminClient::new();

    // Runs on mount and on every token change. In-flight requests for an
    // older token are not cancelled and may land after newer ones.
    Effect::new(move |_| {
        let token = store.token().get();
        refresh(&ctx.config, &token, |request| {
            let client = client.clone();
            spawn_local(async move {
                store_apply(&store, client.fetch(&request).await);
            });
        });
    });

    view! {
        <div class="dashboard">
            <h1>{TITLE}</h1>
            <TokenBox store=store />
            <SummaryTiles store=store />
            <WorkList store=store />
        </div>
    }
}
