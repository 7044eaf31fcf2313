//! Card Canvas Frontend Entry Point

mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("CardCanvas", rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Mounting card canvas");
    mount_to_body(App);
}
