use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use serde::Deserialize;

use super::{error_from_response, ApiConfig, ApiError};
use crate::models::{Credentials, NewProduct, Product, Service};
use crate::session::Session;

/// REST client for the beauty-shop backend.
///
/// Holds the route configuration and the session context, so the auth header
/// is attached here rather than each caller reading browser storage.  The
/// struct is cheap to clone into `spawn_local` blocks.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    session: Session,
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self { config, session }
    }

    // ---------------- Products ----------------

    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let body = self.fetch_json(&self.config.url("/products"), "GET", None).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let payload =
            serde_json::to_string(product).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch_json(&self.config.url("/products"), "POST", Some(&payload))
            .await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: u32) -> Result<(), ApiError> {
        let url = self.config.url(&format!("/products/{}", id));
        self.fetch_json(&url, "DELETE", None).await?;
        Ok(())
    }

    // ---------------- Services ----------------

    pub async fn get_services(&self) -> Result<Vec<Service>, ApiError> {
        let body = self.fetch_json(&self.config.url("/services"), "GET", None).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---------------- Authentication ----------------

    /// Log in and return the issued token.  A 2xx body without a token is an
    /// error - nothing must be persisted in that case.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let payload =
            serde_json::to_string(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self
            .fetch_json(&self.config.url("/auth/login"), "POST", Some(&payload))
            .await?;
        parse_login_body(&body)
    }

    /// Register a new account.  HTTP success status is the success signal;
    /// the response payload is ignored.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let payload =
            serde_json::to_string(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch_json(&self.config.url("/auth/register"), "POST", Some(&payload))
            .await?;
        Ok(())
    }

    // Helper to make fetch requests against the backend.
    async fn fetch_json(
        &self,
        url: &str,
        method: &str,
        body: Option<&str>,
    ) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        // The backend also supports cookie-based sessions for cross-origin
        // calls, so credentials ride along like the original client did.
        opts.set_credentials(RequestCredentials::Include);

        let headers = Headers::new()?;
        if let Some(token) = self.session.token() {
            headers.append("Authorization", &format!("Bearer {}", token))?;
        }
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("response is not a Response".into()))?;

        let text_promise = resp.text()?;
        let text = JsFuture::from(text_promise)
            .await?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            let err = error_from_response(resp.status(), &resp.status_text(), &text);
            if err.is_unauthorized() {
                // Token expired or invalid - drop the session and let the
                // app route back to the login page.
                crate::state::notify_session_expired();
            }
            return Err(err);
        }

        Ok(text)
    }
}

/// Extract the token from a successful login response body.
fn parse_login_body(body: &str) -> Result<String, ApiError> {
    let parsed: LoginBody =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match parsed.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::Auth(
            parsed.error.unwrap_or_else(|| "Login failed".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_body_with_token_yields_token_verbatim() {
        assert_eq!(
            parse_login_body(r#"{"token":"abc.def.ghi"}"#),
            Ok("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn login_body_without_token_surfaces_server_error() {
        assert_eq!(
            parse_login_body(r#"{"error":"bad credentials"}"#),
            Err(ApiError::Auth("bad credentials".to_string()))
        );
    }

    #[test]
    fn login_body_without_token_or_error_uses_fallback() {
        assert_eq!(
            parse_login_body("{}"),
            Err(ApiError::Auth("Login failed".to_string()))
        );
        assert_eq!(
            parse_login_body(r#"{"token":""}"#),
            Err(ApiError::Auth("Login failed".to_string()))
        );
    }

    #[test]
    fn login_body_must_be_json() {
        assert!(matches!(
            parse_login_body("<html></html>"),
            Err(ApiError::Decode(_))
        ));
    }
}
