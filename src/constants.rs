// Shared constants - storage keys and defaults live here so pages and
// storage helpers agree on a single source of truth.
pub const APP_TITLE: &str = "Beauty Shop Admin";

// localStorage keys
pub const TOKEN_STORAGE_KEY: &str = "beauty_shop_token";
pub const THEME_STORAGE_KEY: &str = "beauty_shop_theme";
pub const ACTIVE_VIEW_STORAGE_KEY: &str = "beauty_shop_view";

// Fallback when API_BASE_URL is not injected at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
