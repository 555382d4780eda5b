// Dashboard page: read-only list of the salon's services.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::messages::Message;
use crate::models::Service;
use crate::state::dispatch_global_message;
use crate::utils::format_price;

/// Fetch the service collection and replace the local copy.
pub fn load() {
    dispatch_global_message(Message::ServicesLoading);
    let api = crate::state::api_client();
    spawn_local(async move {
        match api.get_services().await {
            Ok(services) => dispatch_global_message(Message::ServicesLoaded(services)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load services: {}", e).into());
                dispatch_global_message(Message::ServicesLoadFailed(e.to_string()));
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
    heading.set_text_content(Some("Services"));
    container.append_child(&heading)?;

    let card = document.create_element("div")?;
    card.set_class_name("card");

    if let Some(error) = &state.services_error {
        let banner = document.create_element("div")?;
        banner.set_class_name("error-banner");
        banner.set_text_content(Some(&format!("Could not load services: {}", error)));
        card.append_child(&banner)?;
    } else if state.services_loading {
        let loading = document.create_element("p")?;
        loading.set_text_content(Some("Loading services..."));
        card.append_child(&loading)?;
    } else if state.services.is_empty() {
        let empty = document.create_element("p")?;
        empty.set_text_content(Some("No services yet."));
        card.append_child(&empty)?;
    } else {
        let list = document.create_element("ul")?;
        list.set_id("service-list");
        list.set_class_name("item-list");
        render_service_rows(document, &list, &state.services)?;
        card.append_child(&list)?;
    }

    container.append_child(&card)?;
    Ok(())
}

/// Append one `{name} - ${price}` row per service.
pub fn render_service_rows(
    document: &Document,
    list: &Element,
    services: &[Service],
) -> Result<(), JsValue> {
    for service in services {
        let row = document.create_element("li")?;
        row.set_class_name("item-row");

        let label = document.create_element("span")?;
        label.set_text_content(Some(&format!(
            "{} - {}",
            service.name,
            format_price(service.price)
        )));
        row.append_child(&label)?;
        list.append_child(&row)?;
    }
    Ok(())
}
