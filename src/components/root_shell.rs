//! Root Shell Component
//!
//! Applies document-level presentation (RTL Arabic, dark theme) and hosts
//! a single child view.

use leptos::prelude::*;

/// Attributes set on `<html>` once at mount
pub const DOCUMENT_ATTRIBUTES: &[(&str, &str)] = &[("lang", "ar"), ("dir", "rtl")];

/// Body class carrying the dark background/foreground pair
pub const BODY_THEME_CLASS: &str = "theme-dark";

#[component]
pub fn RootShell(children: Children) -> impl IntoView {
    // No tracked reads, so this runs exactly once after mount.
    Effect::new(move |_| apply_document_attributes());

    view! {
        <div class="root-shell">
            {children()}
        </div>
    }
}

fn apply_document_attributes() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[SHELL] No document; skipping presentation attributes");
        return;
    };

    if let Some(root) = document.document_element() {
        for (name, value) in DOCUMENT_ATTRIBUTES {
            let _ = root.set_attribute(name, value);
        }
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("class", BODY_THEME_CLASS);
    }
}
