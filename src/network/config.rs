use crate::constants::DEFAULT_API_BASE_URL;

/// API route configuration.
///
/// The base URL is injected at build time via the `API_BASE_URL` environment
/// variable; the default points at the local development backend and exists
/// so unit tests and early start-up never have to deal with an `Option`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read the build-time `API_BASE_URL`, falling back to the development
    /// default when it was not injected.
    pub fn from_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) => Self::from_url(url),
            None => Self::default(),
        }
    }

    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path, e.g. `url("/products")`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_prefixes_api() {
        let config = ApiConfig::from_url("http://localhost:5000/");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.url("/products"), "http://localhost:5000/api/products");
        assert_eq!(
            config.url("/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
    }
}
