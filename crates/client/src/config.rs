//! Client configuration

/// Base URL used when neither `--url` nor `RENTDESK_API_URL` is given
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Bypass proxies from the environment
    pub no_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            no_proxy: false,
        }
    }

    /// Talk to the backend directly, ignoring `HTTP_PROXY` and friends
    pub fn without_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Join a path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
