//! DOM tests for the list pages: row count and formatting must match the
//! collection the backend returned, and the error state must render
//! differently from an honest empty list.

use wasm_bindgen_test::*;
use web_sys::Document;

use crate::models::{Product, Service};
use crate::pages;
use crate::state::AppState;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn product(id: u32, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: None,
        quantity: None,
    }
}

#[wasm_bindgen_test]
fn product_rows_match_source_collection() {
    let document = document();
    let list = document.create_element("ul").unwrap();

    let products = vec![
        product(1, "Shampoo", 9.99),
        product(2, "Conditioner", 12.5),
        product(3, "Hair Oil", 7.0),
    ];
    pages::products::render_product_rows(&document, &list, &products).unwrap();

    assert_eq!(list.child_element_count(), 3);
    let text = list.text_content().unwrap_or_default();
    assert!(text.contains("Shampoo - $9.99"), "got: {}", text);
    assert!(text.contains("Conditioner - $12.50"), "got: {}", text);
    assert!(text.contains("Hair Oil - $7.00"), "got: {}", text);
}

#[wasm_bindgen_test]
fn empty_collection_renders_zero_rows() {
    let document = document();
    let list = document.create_element("ul").unwrap();
    pages::products::render_product_rows(&document, &list, &[]).unwrap();
    assert_eq!(list.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn products_page_distinguishes_empty_from_error() {
    let document = document();

    // Empty list: friendly empty state.
    let container = document.create_element("div").unwrap();
    let state = AppState::new();
    pages::products::mount(&state, &document, &container).unwrap();
    let text = container.text_content().unwrap_or_default();
    assert!(text.contains("No products yet."), "got: {}", text);

    // Failed load: error banner, no empty-state text.
    let container = document.create_element("div").unwrap();
    let mut state = AppState::new();
    state.products_error = Some("network error: refused".to_string());
    pages::products::mount(&state, &document, &container).unwrap();
    let text = container.text_content().unwrap_or_default();
    assert!(text.contains("Could not load products"), "got: {}", text);
    assert!(!text.contains("No products yet."), "got: {}", text);
}

#[wasm_bindgen_test]
fn service_rows_render_name_and_price() {
    let document = document();
    let list = document.create_element("ul").unwrap();

    let services = vec![Service {
        id: 1,
        name: "Haircut".to_string(),
        price: 25.0,
        description: None,
        duration_minutes: Some(30),
    }];
    pages::dashboard::render_service_rows(&document, &list, &services).unwrap();

    assert_eq!(list.child_element_count(), 1);
    let text = list.text_content().unwrap_or_default();
    assert!(text.contains("Haircut - $25.00"), "got: {}", text);
}
