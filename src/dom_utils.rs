//! Thin helpers for repetitive DOM operations.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// Read the current value of an `<input>` by id; empty string when missing.
pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Mark exactly one sidebar link as active.
pub fn set_active_link(link: &Element, active: bool) {
    if active {
        let _ = link.class_list().add_1("active");
    } else {
        let _ = link.class_list().remove_1("active");
    }
}

/// Remove every child of a container before a fresh mount.
pub fn clear_children(container: &Element) {
    while let Some(child) = container.first_child() {
        let _ = container.remove_child(&child);
    }
}
