#![allow(non_snake_case)]

pub mod api;
pub mod components;
pub mod config;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"Starting field panel frontend".into());

    leptos::mount::mount_to_body(app::App);
}
