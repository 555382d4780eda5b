// Login page.  Credentials stay in the DOM inputs until submit and are
// dropped once the request resolves; only the issued token is kept, inside
// the session context.

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
    title.set_text_content(Some("Welcome Back"));
    card.append_child(&title)?;

    let username: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    username.set_id("login-username");
    username.set_attribute("type", "text")?;
    username.set_placeholder("Username");
    card.append_child(&username)?;

    let password: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    password.set_id("login-password");
    password.set_attribute("type", "password")?;
    password.set_placeholder("Password");
    card.append_child(&password)?;

    let login_btn = document.create_element("button")?;
    login_btn.set_id("login-btn");
    login_btn.set_class_name("btn-primary");
    login_btn.set_attribute("type", "button")?;
    login_btn.set_text_content(Some("Login"));
    {
        let document = document.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            submit_login(&document);
        }) as Box<dyn FnMut(_)>);
        login_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&login_btn)?;

    let switch = document.create_element("a")?;
    switch.set_class_name("auth-switch");
    switch.set_attribute("href", ActiveView::Signup.as_hash())?;
    switch.set_text_content(Some("Need an account? Sign up"));
    {
        let cb = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            dispatch_global_message(Message::NavigateTo(ActiveView::Signup));
        }) as Box<dyn FnMut(_)>);
        switch.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&switch)?;

    container.append_child(&card)?;
    Ok(())
}

fn submit_login(document: &Document) {
    let credentials = Credentials {
        username: dom_utils::input_value(document, "login-username"),
        password: dom_utils::input_value(document, "login-password"),
    };
    if credentials.username.is_empty() || credentials.password.is_empty() {
        toast::error("Username and password are required");
        return;
    }

    let api = crate::state::api_client();
    spawn_local(async move {
        match api.login(&credentials).await {
            Ok(token) => {
                toast::success("Logged in");
                dispatch_global_message(Message::LoginSucceeded { token });
            }
            Err(e) => toast::error(&e.to_string()),
        }
    });
}
