use std::cell::RefCell;

use crate::messages::Message;
use crate::models::{Product, Service};
use crate::network::ApiConfig;
use crate::session::Session;
use crate::storage::{ActiveView, Theme};
use crate::update::update;

/// Global application state.
///
/// Each page's list is a transient, non-authoritative copy of the backend
/// collection, replaced wholesale by every successful load.  Error and
/// loading flags are tracked separately so "load failed" never renders as an
/// innocent empty list.
pub struct AppState {
    pub active_view: ActiveView,
    pub theme: Theme,

    pub config: ApiConfig,
    pub session: Session,
    pub logged_in: bool,

    // Products page
    pub products: Vec<Product>,
    pub products_loading: bool,
    pub products_error: Option<String>,
    // Mirrors of the create-form inputs so a re-render does not eat text
    // the user has already typed.
    pub product_name_input: String,
    pub product_price_input: String,

    // Dashboard page
    pub services: Vec<Service>,
    pub services_loading: bool,
    pub services_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: ActiveView::Dashboard,
            theme: Theme::Light,
            config: ApiConfig::default(),
            session: Session::default(),
            logged_in: false,
            products: Vec::new(),
            products_loading: false,
            products_error: None,
            product_name_input: String::new(),
            product_price_input: String::new(),
            services: Vec::new(),
            services_loading: false,
            services_error: None,
        }
    }

    /// Build an API client carrying the current session.  Cloned into async
    /// blocks so network calls never hold a state borrow.
    pub fn api_client(&self) -> crate::network::ApiClient {
        crate::network::ApiClient::new(self.config.clone(), self.session.clone())
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Clone an `ApiClient` out of the global state.
pub fn api_client() -> crate::network::ApiClient {
    APP_STATE.with(|state| state.borrow().api_client())
}

/// Run a message through the reducer and re-render when it changed anything
/// visible.  The render happens after the mutable borrow ends, so mounted
/// closures are free to dispatch again later.
pub fn dispatch_global_message(msg: Message) {
    let needs_render = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });

    if !needs_render {
        return;
    }

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    APP_STATE.with(|state| {
        let state = state.borrow();
        if let Err(e) = crate::views::render_active_view(&state, &document) {
            web_sys::console::error_1(&format!("Failed to render view: {:?}", e).into());
        }
        if let Err(e) = crate::storage::save_ui_prefs(state.theme, state.active_view) {
            web_sys::console::warn_1(&format!("Failed to persist UI prefs: {:?}", e).into());
        }
    });
}

/// Called by the API client when the backend answered 401.
pub fn notify_session_expired() {
    dispatch_global_message(Message::SessionExpired);
}
