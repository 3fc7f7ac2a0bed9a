//! # Client configuration
//!
//! The client needs exactly one setting: the base URL of the backend REST API.
//! For browser builds it is baked in at compile time from the `API_BASE_URL`
//! environment variable (see [`ClientConfig::from_build_env`]). The same
//! structure can also be read from TOML, which native builds and tests use.
//!
//! ```toml
//! [api]
//! base_url = "https://klas.example.ac.kr/api"
//! ```
//!
//! A missing or empty file is equivalent to [`ClientConfig::default`], which
//! points at a backend on `localhost:8080`.

use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix of the REST API, without a
    /// trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
        }
    }

    /// Config taken from `API_BASE_URL` at compile time, or the default.
    pub fn from_build_env() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        Ok(Self::new(config.api.base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://example.org/api/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://example.org/api");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://example.org");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
