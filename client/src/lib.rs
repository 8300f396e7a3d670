//! # darkmode-client
//!
//! Leptos + WASM frontend for the documentation site's dark/light theme.
//!
//! The theme controller (`util::dark_mode`) reads a stored preference or the
//! system color scheme, applies the `.dark` root class, and flips/persists it
//! on click. `components::dark_mode_toggle` renders the button for Leptos
//! pages; `attach_dark_mode` wires the same behavior into plain HTML pages.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_logging();
    leptos::mount::hydrate_body(app::App);
}

/// WASM entry point for static pages carrying the toggle markup by hand.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = attachDarkMode)]
pub fn attach_dark_mode() {
    init_logging();
    util::browser::attach();
}

#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second entry point on the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Info);
}
