//! Work List Component

use leptos::prelude::*;

use crate::models::Work;
use crate::store::{DashboardStateStoreFields, DashboardStore};

const HEADING: &str = "الأعمال";

/// Text of one list row: the work name followed by its role in parentheses
pub fn work_line(work: &Work) -> String {
    format!("{} ({})", work.name, work.role_name)
}

/// Always rendered; empty until a works fetch succeeds.
///
/// Rows are keyed by `id`, so works sharing an id render as a single row.
#[component]
pub fn WorkList(store: DashboardStore) -> impl IntoView {
    view! {
        <div class="panel works">
            <h2>{HEADING}</h2>
            <ul class="work-list">
                <For
                    each=move || store.works().get()
                    key=|work| work.id
                    children=move |work| view! { <li class="work-item">{work_line(&work)}</li> }
                />
            </ul>
        </div>
    }
}
