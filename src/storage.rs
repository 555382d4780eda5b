use wasm_bindgen::JsValue;

use crate::constants::{ACTIVE_VIEW_STORAGE_KEY, THEME_STORAGE_KEY};

/// The routed views of the application.  The sidebar switches between them;
/// the URL hash mirrors the active one so a reload lands on the same page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Products,
    Login,
    Signup,
}

impl ActiveView {
    pub fn as_hash(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "#/",
            ActiveView::Products => "#/products",
            ActiveView::Login => "#/login",
            ActiveView::Signup => "#/signup",
        }
    }

    pub fn from_hash(hash: &str) -> Self {
        match hash {
            "#/products" => ActiveView::Products,
            "#/login" => ActiveView::Login,
            "#/signup" => ActiveView::Signup,
            _ => ActiveView::Dashboard,
        }
    }
}

/// Light/dark theme, applied as a class on `<body>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Persist the UI preferences (theme + active view) to localStorage.
pub fn save_ui_prefs(theme: Theme, view: ActiveView) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let local_storage = window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("no local storage"))?;

    local_storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
    local_storage.set_item(ACTIVE_VIEW_STORAGE_KEY, view.as_hash())?;
    Ok(())
}

/// Load the persisted theme, defaulting to light when absent.
pub fn load_theme() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());

    match stored {
        Some(value) => Theme::from_str(&value),
        None => Theme::Light,
    }
}

/// Resolve the view to show at startup.  The URL hash wins over the
/// persisted preference so deep links keep working.
pub fn initial_view() -> ActiveView {
    if let Some(window) = web_sys::window() {
        if let Ok(hash) = window.location().hash() {
            if !hash.is_empty() {
                return ActiveView::from_hash(&hash);
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(ACTIVE_VIEW_STORAGE_KEY) {
                return ActiveView::from_hash(&stored);
            }
        }
    }
    ActiveView::Dashboard
}

/// Reflect the active view in the URL hash.
pub fn sync_location_hash(view: ActiveView) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(view.as_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        for view in [
            ActiveView::Dashboard,
            ActiveView::Products,
            ActiveView::Login,
            ActiveView::Signup,
        ] {
            assert_eq!(ActiveView::from_hash(view.as_hash()), view);
        }
    }

    #[test]
    fn unknown_hash_falls_back_to_dashboard() {
        assert_eq!(ActiveView::from_hash("#/bookings"), ActiveView::Dashboard);
        assert_eq!(ActiveView::from_hash(""), ActiveView::Dashboard);
    }

    #[test]
    fn theme_string_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str("purple"), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
