#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = content::validate(&content::PORTFOLIO) {
        log::error!("portfolio content is inconsistent: {err:#}");
    }

    leptos::mount::mount_to_body(App);
}

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod pages;
pub mod state;
pub mod viewport;

pub use crate::app::App;
