//! Browser entry point.
//!
//! Installs logging, resolves the theme store once and mounts the app.

use std::sync::Arc;

use app::{App, load_site_config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Another logger may already be installed by the host page.
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = Arc::new(load_site_config());
    let store = blog_ui::browser::theme_store(&config.theme.storage_key);
    log::info!("starting with {} theme", store.get());

    leptos::mount::mount_to_body(move || view! { <App store=store config=config /> });
}
