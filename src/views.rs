// Renders the UI for the current application state: theme, navbar bits,
// active sidebar link and the routed page inside `#content-container`.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;
use crate::state::AppState;
use crate::storage::{ActiveView, Theme};

pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    crate::storage::sync_location_hash(state.active_view);

    if let Some(body) = document.body() {
        body.set_class_name(match state.theme {
            Theme::Light => "",
            Theme::Dark => "theme-dark",
        });
    }

    if let Some(toggle) = document.get_element_by_id("theme-toggle") {
        toggle.set_text_content(Some(match state.theme {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }));
    }

    if let Some(status) = document.get_element_by_id("session-status") {
        status.set_text_content(Some(if state.logged_in { "Signed in" } else { "" }));
    }

    let links = [
        ("nav-dashboard", ActiveView::Dashboard),
        ("nav-products", ActiveView::Products),
        ("nav-login", ActiveView::Login),
        ("nav-signup", ActiveView::Signup),
    ];
    for (id, view) in links {
        if let Some(link) = document.get_element_by_id(id) {
            dom_utils::set_active_link(&link, state.active_view == view);
        }
    }

    let container = document
        .get_element_by_id("content-container")
        .ok_or_else(|| JsValue::from_str("content-container missing"))?;
    dom_utils::clear_children(&container);

    match state.active_view {
        ActiveView::Dashboard => crate::pages::dashboard::mount(state, document, &container),
        ActiveView::Products => crate::pages::products::mount(state, document, &container),
        ActiveView::Login => crate::pages::login::mount(document, &container),
        ActiveView::Signup => crate::pages::signup::mount(document, &container),
    }
}
