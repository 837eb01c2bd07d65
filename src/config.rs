//! Client configuration.
//!
//! The only settings the library needs are the agent token and the base URL.
//! Both can come straight from the caller, from a TOML file, or from the
//! `STARTRADERS_TOKEN` / `STARTRADERS_URL` environment variables.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_BASE_URL;
use crate::error::Error;

pub const TOKEN_ENV_VAR: &str = "STARTRADERS_TOKEN";
pub const URL_ENV_VAR: &str = "STARTRADERS_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Agent bearer token issued at registration.
    pub token: String,
    /// API endpoint; defaults to the production server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
        }
    }

    /// Load configuration from a TOML file with a `token` key and an
    /// optional `base_url` key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Read `STARTRADERS_TOKEN` (required) and `STARTRADERS_URL` (optional)
    /// from the environment.
    pub fn from_env() -> Result<Self, Error> {
        let token = env::var(TOKEN_ENV_VAR)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV_VAR} is not set")))?;
        let base_url = env::var(URL_ENV_VAR).unwrap_or_else(|_| default_base_url());
        Ok(Self { token, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_when_absent() {
        let config: ClientConfig = toml::from_str("token = \"abc\"").unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_base_url_wins() {
        let config: ClientConfig =
            toml::from_str("token = \"abc\"\nbase_url = \"http://localhost:9999\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:9999");
    }

    #[test]
    fn missing_token_is_an_error() {
        let result: Result<ClientConfig, _> = toml::from_str("base_url = \"x\"");
        assert!(result.is_err());
    }
}
