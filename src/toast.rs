//! Tiny toast helper for non-blocking feedback.
//! A `#toast-root` container is created once per page; toasts append to it
//! and remove themselves after a few seconds.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement};

const TOAST_LIFETIME_MS: i32 = 4000;

#[derive(Clone, Copy, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

pub fn show(message: &str, kind: ToastKind) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    let root = ensure_root(&document);

    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    let class = match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    toast.set_class_name(class);
    toast.set_text_content(Some(message));
    let _ = root.append_child(&toast);

    let toast: HtmlElement = toast.unchecked_into();
    let cb = Closure::once_into_js(move || {
        if let Some(parent) = toast.parent_node() {
            let _ = parent.remove_child(&toast);
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        TOAST_LIFETIME_MS,
    );
}

fn ensure_root(document: &Document) -> Element {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return el;
    }
    let root = document
        .create_element("div")
        .expect("failed to create toast root");
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    if let Some(body) = document.body() {
        let _ = body.append_child(&root);
    }
    root
}
