use wasm_bindgen::prelude::*;

pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod session;
pub mod state;
pub mod storage;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

use crate::storage::ActiveView;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Restore persisted session and UI preferences before the first render.
    let session = session::Session::load_from_storage();
    let theme = storage::load_theme();
    let view = storage::initial_view();

    state::APP_STATE.with(|state_ref| {
        let mut state = state_ref.borrow_mut();
        state.config = network::ApiConfig::from_env();
        state.logged_in = session.is_logged_in();
        state.session = session;
        state.theme = theme;
        state.active_view = view;
    });

    // Build the shell chrome once, then render the routed page.
    ui::setup::create_base_ui(&document)?;
    state::APP_STATE.with(|state_ref| {
        let state = state_ref.borrow();
        views::render_active_view(&state, &document)
    })?;

    // Kick the initial data load for the landing view.
    match view {
        ActiveView::Dashboard => pages::dashboard::load(),
        ActiveView::Products => pages::products::load(),
        ActiveView::Login | ActiveView::Signup => {}
    }

    Ok(())
}
