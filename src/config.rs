//! Process-wide API configuration.
//!
//! The base URL is resolved once at startup and injected into the
//! transport; nothing else in the crate reads the environment. Tests
//! construct an [`ApiConfig`] pointing at whatever they need instead of
//! relying on the default.

/// Default base URL of the inventory REST API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV_VAR: &str = "INVENTORY_API_URL";

/// Read-only API configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a configuration pointing at an explicit base URL.
    ///
    /// A trailing slash is stripped so path joining stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolves the base URL from `INVENTORY_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var_os(BASE_URL_ENV_VAR)
            .and_then(|val| val.into_string().ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://example.com/api/");
        assert_eq!(config.base_url(), "http://example.com/api");
    }
}
