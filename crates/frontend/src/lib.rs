pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use crate::app::App;
use crate::shared::config::DashboardConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = DashboardConfig::load();
    let config = loaded.clone().unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.level());
    console_error_panic_hook::set_once();

    if let Err(e) = loaded {
        log::warn!("dashboard config ignored, using defaults: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
