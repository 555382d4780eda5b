//! Session persistence tests: the login token must be stored verbatim and
//! removed again when the session ends.

use wasm_bindgen_test::*;

use crate::constants::TOKEN_STORAGE_KEY;
use crate::messages::Message;
use crate::session::Session;
use crate::state::AppState;
use crate::storage::ActiveView;
use crate::update::update;

wasm_bindgen_test_configure!(run_in_browser);

fn stored_token() -> Option<String> {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(TOKEN_STORAGE_KEY)
        .unwrap()
}

#[wasm_bindgen_test]
fn token_round_trips_verbatim() {
    let mut session = Session::from_token(None);
    session.set_token("tok-123.abc");

    assert_eq!(stored_token().as_deref(), Some("tok-123.abc"));
    assert_eq!(
        Session::load_from_storage().token(),
        Some("tok-123.abc")
    );

    session.clear();
    assert_eq!(stored_token(), None);
    assert_eq!(Session::load_from_storage().token(), None);
}

#[wasm_bindgen_test]
fn login_success_persists_token_and_redirects() {
    let mut state = AppState::new();
    state.active_view = ActiveView::Login;

    let rerender = update(
        &mut state,
        Message::LoginSucceeded {
            token: "issued-token".to_string(),
        },
    );

    assert!(rerender);
    assert!(state.logged_in);
    assert_eq!(state.active_view, ActiveView::Dashboard);
    assert_eq!(stored_token().as_deref(), Some("issued-token"));

    // Expiry drops the token and routes back to login.
    let rerender = update(&mut state, Message::SessionExpired);
    assert!(rerender);
    assert!(!state.logged_in);
    assert_eq!(state.active_view, ActiveView::Login);
    assert_eq!(stored_token(), None);
}
