// Reducer: applies a `Message` to the state and reports whether the view
// needs re-rendering.  Kept free of DOM access so it stays testable off-wasm;
// side effects (network, hash sync) live with the dispatchers and the view.

use crate::messages::Message;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> bool {
    match msg {
        // ---------------- Shell ----------------
        Message::NavigateTo(view) => {
            if state.active_view == view {
                return false;
            }
            state.active_view = view;
            true
        }
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            true
        }

        // ---------------- Products ----------------
        Message::ProductsLoading => {
            state.products_loading = true;
            state.products_error = None;
            true
        }
        Message::ProductsLoaded(products) => {
            state.products = products;
            state.products_loading = false;
            state.products_error = None;
            true
        }
        Message::ProductsLoadFailed(error) => {
            state.products_loading = false;
            state.products_error = Some(error);
            true
        }
        Message::SetProductNameInput(value) => {
            // Input mirrors only; no re-render or the field would lose focus.
            state.product_name_input = value;
            false
        }
        Message::SetProductPriceInput(value) => {
            state.product_price_input = value;
            false
        }
        Message::ProductCreated => {
            state.product_name_input.clear();
            state.product_price_input.clear();
            true
        }

        // ---------------- Services ----------------
        Message::ServicesLoading => {
            state.services_loading = true;
            state.services_error = None;
            true
        }
        Message::ServicesLoaded(services) => {
            state.services = services;
            state.services_loading = false;
            state.services_error = None;
            true
        }
        Message::ServicesLoadFailed(error) => {
            state.services_loading = false;
            state.services_error = Some(error);
            true
        }

        // ---------------- Auth ----------------
        Message::LoginSucceeded { token } => {
            state.session.set_token(&token);
            state.logged_in = true;
            state.active_view = crate::storage::ActiveView::Dashboard;
            true
        }
        Message::SessionExpired => {
            state.session.clear();
            state.logged_in = false;
            state.active_view = crate::storage::ActiveView::Login;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::storage::{ActiveView, Theme};

    fn product(id: u32, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            description: None,
            quantity: None,
        }
    }

    #[test]
    fn products_loaded_replaces_list_wholesale() {
        let mut state = AppState::new();
        state.products = vec![product(1, "Old", 1.0)];
        state.products_loading = true;
        state.products_error = Some("stale".to_string());

        let fresh = vec![product(2, "Shampoo", 9.99), product(3, "Conditioner", 12.5)];
        assert!(update(&mut state, Message::ProductsLoaded(fresh.clone())));

        assert_eq!(state.products, fresh);
        assert!(!state.products_loading);
        assert_eq!(state.products_error, None);
    }

    #[test]
    fn load_failure_keeps_list_but_records_error() {
        let mut state = AppState::new();
        state.products = vec![product(1, "Shampoo", 9.99)];

        assert!(update(
            &mut state,
            Message::ProductsLoadFailed("network error: refused".to_string())
        ));

        // The stale copy is not cleared; the error renders instead.
        assert_eq!(state.products.len(), 1);
        assert_eq!(
            state.products_error.as_deref(),
            Some("network error: refused")
        );
    }

    #[test]
    fn product_created_resets_both_inputs() {
        let mut state = AppState::new();
        update(
            &mut state,
            Message::SetProductNameInput("Hair Oil".to_string()),
        );
        update(&mut state, Message::SetProductPriceInput("14.50".to_string()));

        assert!(update(&mut state, Message::ProductCreated));
        assert_eq!(state.product_name_input, "");
        assert_eq!(state.product_price_input, "");
    }

    #[test]
    fn input_mirror_updates_do_not_rerender() {
        let mut state = AppState::new();
        assert!(!update(
            &mut state,
            Message::SetProductNameInput("x".to_string())
        ));
        assert!(!update(
            &mut state,
            Message::SetProductPriceInput("1".to_string())
        ));
        assert_eq!(state.product_name_input, "x");
        assert_eq!(state.product_price_input, "1");
    }

    #[test]
    fn navigation_only_rerenders_on_change() {
        let mut state = AppState::new();
        assert!(!update(&mut state, Message::NavigateTo(ActiveView::Dashboard)));
        assert!(update(&mut state, Message::NavigateTo(ActiveView::Products)));
        assert_eq!(state.active_view, ActiveView::Products);
    }

    #[test]
    fn signup_success_navigates_to_login_exactly_once() {
        let mut state = AppState::new();
        state.active_view = ActiveView::Signup;

        // The signup page dispatches NavigateTo(Login) on a success status.
        assert!(update(&mut state, Message::NavigateTo(ActiveView::Login)));
        assert_eq!(state.active_view, ActiveView::Login);

        // A duplicate dispatch is a no-op, not a second navigation.
        assert!(!update(&mut state, Message::NavigateTo(ActiveView::Login)));
        assert_eq!(state.active_view, ActiveView::Login);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        let mut state = AppState::new();
        assert!(update(&mut state, Message::ToggleTheme));
        assert_eq!(state.theme, Theme::Dark);
        assert!(update(&mut state, Message::ToggleTheme));
        assert_eq!(state.theme, Theme::Light);
    }
}
