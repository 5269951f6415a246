//! # Client configuration
//!
//! The portal needs one setting from its environment: the base URL of the REST
//! API. [`ApiConfig`] also carries the request timeout.
//!
//! | Source | Used by |
//! |--------|---------|
//! | `PORTAL_API_BASE_URL` at runtime (after loading `.env` with `dotenvy`) | native builds (web host, tests, tools) |
//! | `PORTAL_API_BASE_URL` at compile time (`option_env!`) | browser builds, which have no process environment |
//! | TOML with `base_url` and `timeout_secs` keys | anything that wants a config file |
//!
//! A missing variable falls back to [`DEFAULT_BASE_URL`].

use serde::{Deserialize, Serialize};

pub const BASE_URL_VAR: &str = "PORTAL_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout. Only enforced on native targets.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Read the base URL from the environment.
    pub fn from_env() -> Self {
        match base_url_from_env() {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                tracing::info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from_env() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_env() -> Option<String> {
    option_env!("PORTAL_API_BASE_URL").map(str::to_string)
}
