// Signup page.  A success status from the backend navigates to the login
// view; the response payload is not inspected.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom_utils;
use crate::messages::Message;
use crate::models::Credentials;
use crate::state::dispatch_global_message;
use crate::storage::ActiveView;
use crate::toast;

pub fn mount(document: &Document, container: &Element) -> Result<(), JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card auth-card");

    let title = document.create_element("h2")?;
    title.set_text_content(Some("Create Account"));
    card.append_child(&title)?;

    let username: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    username.set_id("signup-username");
    username.set_attribute("type", "text")?;
    username.set_placeholder("Username");
    card.append_child(&username)?;

    let password: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    password.set_id("signup-password");
    password.set_attribute("type", "password")?;
    password.set_placeholder("Password");
    card.append_child(&password)?;

    let signup_btn = document.create_element("button")?;
    signup_btn.set_id("signup-btn");
    signup_btn.set_class_name("btn-primary");
    signup_btn.set_attribute("type", "button")?;
    signup_btn.set_text_content(Some("Sign Up"));
    {
        let document = document.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            submit_signup(&document);
        }) as Box<dyn FnMut(_)>);
        signup_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&signup_btn)?;

    let switch = document.create_element("a")?;
    switch.set_class_name("auth-switch");
    switch.set_attribute("href", ActiveView::Login.as_hash())?;
    switch.set_text_content(Some("Already registered? Login"));
    {
        let cb = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            dispatch_global_message(Message::NavigateTo(ActiveView::Login));
        }) as Box<dyn FnMut(_)>);
        switch.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&switch)?;

    container.append_child(&card)?;
    Ok(())
}

fn submit_signup(document: &Document) {
    let credentials = Credentials {
        username: dom_utils::input_value(document, "signup-username"),
        password: dom_utils::input_value(document, "signup-password"),
    };
    if credentials.username.is_empty() || credentials.password.is_empty() {
        toast::error("Username and password are required");
        return;
    }

    let api = crate::state::api_client();
    spawn_local(async move {
        match api.register(&credentials).await {
            Ok(()) => {
                toast::success("Account created");
                dispatch_global_message(Message::NavigateTo(ActiveView::Login));
            }
            Err(e) => toast::error(&e.to_string()),
        }
    });
}
