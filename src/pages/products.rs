// Products admin page: create form plus the product list with per-row
// delete buttons.  All data flows through the backend; every successful
// mutation is followed by exactly one reload, failed mutations surface a
// toast and skip the reload.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement};

use crate::messages::Message;
use crate::models::{NewProduct, Product};
use crate::state::{dispatch_global_message, APP_STATE};
use crate::toast;
use crate::utils::{format_price, parse_price};

/// Fetch the product collection and replace the local copy.
pub fn load() {
    dispatch_global_message(Message::ProductsLoading);
    let api = crate::state::api_client();
    spawn_local(async move {
        match api.get_products().await {
            Ok(products) => dispatch_global_message(Message::ProductsLoaded(products)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load products: {}", e).into());
                dispatch_global_message(Message::ProductsLoadFailed(e.to_string()));
            }
        }
    });
}

pub fn mount(
    state: &crate::state::AppState,
    document: &Document,
    container: &Element,
) -> Result<(), JsValue> {
    let heading = document.create_element("h2")?;
    heading.set_text_content(Some("Products"));
    container.append_child(&heading)?;

    container.append_child(&create_form(state, document)?.into())?;
    container.append_child(&create_list_section(state, document)?.into())?;
    Ok(())
}

fn create_form(
    state: &crate::state::AppState,
    document: &Document,
) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card");

    let title = document.create_element("h3")?;
    title.set_text_content(Some("Add Product"));
    card.append_child(&title)?;

    let row = document.create_element("div")?;
    row.set_class_name("form-row");

    // Inputs mirror into state so a list re-render does not wipe what the
    // user already typed.
    let name_input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    name_input.set_id("product-name");
    name_input.set_attribute("type", "text")?;
    name_input.set_placeholder("Product Name");
    name_input.set_value(&state.product_name_input);
    {
        let input = name_input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            dispatch_global_message(Message::SetProductNameInput(input.value()));
        }) as Box<dyn FnMut(_)>);
        name_input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    row.append_child(&name_input)?;

    let price_input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    price_input.set_id("product-price");
    price_input.set_attribute("type", "number")?;
    price_input.set_placeholder("Price");
    price_input.set_value(&state.product_price_input);
    {
        let input = price_input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            dispatch_global_message(Message::SetProductPriceInput(input.value()));
        }) as Box<dyn FnMut(_)>);
        price_input.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    row.append_child(&price_input)?;
    card.append_child(&row)?;

    let add_btn = document.create_element("button")?;
    add_btn.set_id("add-product-btn");
    add_btn.set_class_name("btn-primary");
    add_btn.set_attribute("type", "button")?;
    add_btn.set_text_content(Some("Add Product"));
    {
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            submit_new_product();
        }) as Box<dyn FnMut(_)>);
        add_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    card.append_child(&add_btn)?;

    Ok(card)
}

// Validate the form mirror and fire the create request.
fn submit_new_product() {
    let (name, price_raw) = APP_STATE.with(|s| {
        let state = s.borrow();
        (
            state.product_name_input.trim().to_string(),
            state.product_price_input.clone(),
        )
    });

    if name.is_empty() {
        toast::error("Product name is required");
        return;
    }
    let price = match parse_price(&price_raw) {
        Some(p) => p,
        None => {
            toast::error("Price must be a non-negative number");
            return;
        }
    };

    let api = crate::state::api_client();
    spawn_local(async move {
        match api.create_product(&NewProduct { name, price }).await {
            Ok(()) => {
                dispatch_global_message(Message::ProductCreated);
                load();
            }
            Err(e) => toast::error(&format!("Failed to add product: {}", e)),
        }
    });
}

fn create_list_section(
    state: &crate::state::AppState,
    document: &Document,
) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card");

    let title = document.create_element("h3")?;
    title.set_text_content(Some("Product List"));
    card.append_child(&title)?;

    if let Some(error) = &state.products_error {
        let banner = document.create_element("div")?;
        banner.set_class_name("error-banner");
        banner.set_text_content(Some(&format!("Could not load products: {}", error)));
        card.append_child(&banner)?;
        return Ok(card);
    }

    if state.products_loading {
        let loading = document.create_element("p")?;
        loading.set_text_content(Some("Loading products..."));
        card.append_child(&loading)?;
        return Ok(card);
    }

    if state.products.is_empty() {
        let empty = document.create_element("p")?;
        empty.set_text_content(Some("No products yet."));
        card.append_child(&empty)?;
        return Ok(card);
    }

    let list = document.create_element("ul")?;
    list.set_id("product-list");
    list.set_class_name("item-list");
    render_product_rows(document, &list, &state.products)?;
    card.append_child(&list)?;

    Ok(card)
}

/// Append one row per product: `{name} - ${price}` plus a delete button.
pub fn render_product_rows(
    document: &Document,
    list: &Element,
    products: &[Product],
) -> Result<(), JsValue> {
    for product in products {
        let row = document.create_element("li")?;
        row.set_class_name("item-row");

        let label = document.create_element("span")?;
        label.set_text_content(Some(&format!(
            "{} - {}",
            product.name,
            format_price(product.price)
        )));
        row.append_child(&label)?;

        let delete_btn = document.create_element("button")?;
        delete_btn.set_class_name("btn-danger");
        delete_btn.set_attribute("type", "button")?;
        delete_btn.set_text_content(Some("Delete"));

        let id = product.id;
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            delete_product(id);
        }) as Box<dyn FnMut(_)>);
        delete_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();

        row.append_child(&delete_btn)?;
        list.append_child(&row)?;
    }
    Ok(())
}

fn delete_product(id: u32) {
    let api = crate::state::api_client();
    spawn_local(async move {
        match api.delete_product(id).await {
            Ok(()) => load(),
            Err(e) => toast::error(&format!("Failed to delete product: {}", e)),
        }
    });
}
