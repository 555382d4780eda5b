use serde::{Deserialize, Serialize};

// Wire models matching the backend schema.  The backend owns identity; the
// frontend holds transient copies that are replaced wholesale on every load.

/// Product as returned by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    // Fields the backend emits but the list view does not render.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Payload for `POST /api/products`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Service as returned by `GET /api/services` (read-only in the UI).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

/// Credentials for login/signup.  Transient input state - built at submit
/// time and dropped once the request resolves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
