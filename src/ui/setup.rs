//! Static shell chrome: sidebar, navbar and the content container pages
//! mount into.  Built once at startup; `views::render_active_view` only
//! swaps page content and styling afterwards.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::APP_TITLE;
use crate::messages::Message;
use crate::storage::ActiveView;

pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    ensure_styles(document)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?;

    let app_root = document.create_element("div")?;
    app_root.set_id("app-root");
    app_root.set_class_name("app-root");

    app_root.append_child(&create_sidebar(document)?.into())?;

    // Main column: navbar on top, routed page content below.
    let main_area = document.create_element("div")?;
    main_area.set_id("main-area");
    main_area.set_class_name("main-area");

    main_area.append_child(&create_navbar(document)?.into())?;

    let content = document.create_element("div")?;
    content.set_id("content-container");
    content.set_class_name("content-container");
    main_area.append_child(&content)?;

    app_root.append_child(&main_area)?;
    body.append_child(&app_root)?;

    Ok(())
}

fn create_sidebar(document: &Document) -> Result<Element, JsValue> {
    let sidebar = document.create_element("aside")?;
    sidebar.set_id("sidebar");
    sidebar.set_class_name("sidebar");

    let nav = document.create_element("nav")?;
    nav.set_class_name("sidebar-nav");

    let links: [(&str, &str, ActiveView); 4] = [
        ("nav-dashboard", "Dashboard", ActiveView::Dashboard),
        ("nav-products", "Products", ActiveView::Products),
        ("nav-login", "Login", ActiveView::Login),
        ("nav-signup", "Sign Up", ActiveView::Signup),
    ];

    for (id, label, view) in links {
        let link = document.create_element("a")?;
        link.set_id(id);
        link.set_class_name("nav-link");
        link.set_attribute("href", view.as_hash())?;
        link.set_text_content(Some(label));

        let click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            crate::state::dispatch_global_message(Message::NavigateTo(view));
            // Kick the page's initial load once the view has switched.
            match view {
                ActiveView::Dashboard => crate::pages::dashboard::load(),
                ActiveView::Products => crate::pages::products::load(),
                ActiveView::Login | ActiveView::Signup => {}
            }
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();

        nav.append_child(&link)?;
    }

    sidebar.append_child(&nav)?;
    Ok(sidebar)
}

fn create_navbar(document: &Document) -> Result<Element, JsValue> {
    let navbar = document.create_element("nav")?;
    navbar.set_id("navbar");
    navbar.set_class_name("navbar");

    let title = document.create_element("h1")?;
    title.set_class_name("navbar-title");
    title.set_text_content(Some(APP_TITLE));
    navbar.append_child(&title)?;

    let right = document.create_element("div")?;
    right.set_class_name("navbar-right");

    let session_status = document.create_element("span")?;
    session_status.set_id("session-status");
    session_status.set_class_name("session-status");
    right.append_child(&session_status)?;

    let theme_toggle = document.create_element("button")?;
    theme_toggle.set_id("theme-toggle");
    theme_toggle.set_class_name("theme-toggle");
    theme_toggle.set_attribute("type", "button")?;

    let click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        crate::state::dispatch_global_message(Message::ToggleTheme);
    }) as Box<dyn FnMut(_)>);
    theme_toggle.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();

    right.append_child(&theme_toggle)?;
    navbar.append_child(&right)?;
    Ok(navbar)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-styles").is_some() {
        return Ok(());
    }

    let css = "
body{margin:0;font-family:Arial,Helvetica,sans-serif;background:#faf7f8;color:#1f2933}
body.theme-dark{background:#111827;color:#e5e7eb}
.app-root{display:flex;height:100vh}
.sidebar{width:220px;padding:16px;background:#f3e8ee;box-sizing:border-box}
body.theme-dark .sidebar{background:#1f2937}
.sidebar-nav{display:flex;flex-direction:column;gap:12px}
.nav-link{text-decoration:none;color:inherit;padding:6px 8px;border-radius:6px}
.nav-link.active{background:#e11d73;color:#fff}
.main-area{flex:1;display:flex;flex-direction:column;overflow:auto}
.navbar{display:flex;justify-content:space-between;align-items:center;padding:10px 24px;box-shadow:0 1px 3px rgba(0,0,0,.15)}
.navbar-title{font-size:20px;margin:0}
.navbar-right{display:flex;align-items:center;gap:12px}
.session-status{font-size:13px;opacity:.8}
.theme-toggle{border:none;background:transparent;font-size:18px;cursor:pointer}
.content-container{padding:24px;flex:1}
.card{background:#fff;border-radius:10px;padding:20px;margin-bottom:24px;box-shadow:0 1px 4px rgba(0,0,0,.1)}
body.theme-dark .card{background:#1f2937}
.form-row{display:flex;gap:12px;margin-bottom:12px}
.form-row input{flex:1;padding:8px 10px;border:1px solid #cbd2d9;border-radius:6px}
.btn-primary{background:#e11d73;color:#fff;border:none;padding:8px 16px;border-radius:8px;cursor:pointer}
.btn-danger{background:#dc2626;color:#fff;border:none;padding:4px 10px;border-radius:6px;cursor:pointer}
.item-list{list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:8px}
.item-row{display:flex;justify-content:space-between;align-items:center;background:#f5f5f4;padding:8px 12px;border-radius:6px}
body.theme-dark .item-row{background:#374151}
.error-banner{background:#fee2e2;color:#991b1b;padding:10px 12px;border-radius:6px}
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:999}
.toast{padding:10px 16px;border-radius:6px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.2)}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
";

    let style = document.create_element("style")?;
    style.set_id("app-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
