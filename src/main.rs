//! Manga Admin Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // `ADMIN_LOG_LEVEL=off` leaves the logger uninstalled.
    if let Some(level) = config::log_level().to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    mount_to_body(App);
}
