//! Browser entry point: installs panic and log forwarding, then mounts the app.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Log level forwarded to the browser console.
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        log::warn!("console logger already initialized");
    }

    leptos::mount::mount_to_body(App);
}
