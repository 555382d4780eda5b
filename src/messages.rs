// The events that can occur in the UI.  Pages dispatch these through
// `state::dispatch_global_message`; the reducer in `update.rs` applies them.

use crate::models::{Product, Service};
use crate::storage::ActiveView;

#[derive(Clone, Debug)]
pub enum Message {
    // Shell
    NavigateTo(ActiveView),
    ToggleTheme,

    // Products page
    ProductsLoading,
    ProductsLoaded(Vec<Product>),
    ProductsLoadFailed(String),
    SetProductNameInput(String),
    SetProductPriceInput(String),
    // A create round-trip succeeded; inputs reset before the reload.
    ProductCreated,

    // Dashboard (services)
    ServicesLoading,
    ServicesLoaded(Vec<Service>),
    ServicesLoadFailed(String),

    // Auth
    LoginSucceeded { token: String },
    SessionExpired,
}
