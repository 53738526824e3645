mod app;
mod components;
mod logging;
mod models;
mod pages;
mod services;

use kotoba_core::AppConfig;
use leptos::prelude::*;

use crate::app::App;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = services::storage::load_config();
    let config = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();

    if let Err(e) = logging::setup_logging(&config.log_filter) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {e}").into());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Ignoring invalid {} override: {}", AppConfig::OVERRIDE_KEY, e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
