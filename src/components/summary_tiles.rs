//! Summary Tiles Component
//!
//! Three count tiles, rendered only once a summary has been fetched.

use leptos::prelude::*;

use crate::models::Summary;
use crate::store::{DashboardStateStoreFields, DashboardStore};

/// Missing counts render blank
fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Values shown in the three tiles, in display order
pub fn tile_values(summary: &Summary) -> [String; 3] {
    [
        count(summary.total_tasks),
        count(summary.submitted),
        format!("{} | {}", count(summary.accepted), count(summary.rejected)),
    ]
}

/// Full tile captions, in display order
pub fn tile_texts(summary: &Summary) -> [String; 3] {
    [
        format!("إجمالي المهام: {}", count(summary.total_tasks)),
        format!("قيد المراجعة: {}", count(summary.submitted)),
        format!(
            "مقبولة: {} | مرفوضة: {}",
            count(summary.accepted),
            count(summary.rejected)
        ),
    ]
}

/// Tiles carry their bare value in `data-value` next to the caption
#[component]
pub fn SummaryTiles(store: DashboardStore) -> impl IntoView {
    move || {
        store.summary().get().map(|summary| {
            let tiles = tile_texts(&summary).into_iter().zip(tile_values(&summary));
            view! {
                <div class="summary-tiles">
                    {tiles
                        .map(|(text, value)| view! { <div class="panel tile" data-value=value>{text}</div> })
                        .collect_view()}
                </div>
            }
        })
    }
}
