//! Token Box Component
//!
//! Text input bound both ways to the admin token.

use leptos::prelude::*;

use crate::store::{DashboardStateStoreFields, DashboardStore};

const LABEL: &str = "توكن الأدمن (للديمو فقط):";
const PLACEHOLDER: &str = "ضع التوكن من /auth/oauth/callback?code=DISCORD_ID";
const DISCLAIMER: &str = "* في الإنتاج استخدم OAuth كامل مع جلسات/كوكيز.";

/// Every keystroke overwrites the token; nothing is validated or trimmed.
#[component]
pub fn TokenBox(store: DashboardStore) -> impl IntoView {
    view! {
        <div class="panel token-box">
            <label class="token-label" for="admin-token">{LABEL}</label>
            <input
                id="admin-token"
                type="text"
                class="token-input"
                placeholder=PLACEHOLDER
                prop:value=move || store.token().get()
                on:input=move |ev| store.token().set(event_target_value(&ev))
            />
            <p class="disclaimer">{DISCLAIMER}</p>
        </div>
    }
}
