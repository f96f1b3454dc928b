use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

use crate::error::ConfigError;

/// Connection settings for the species catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the catalog API, e.g. `https://pokeapi.co/api/v2`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Prefix for thumbnail URIs derived from resource ids
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Upper bound on species requests in flight during a roster fetch
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// How many names the search box's index loads
    #[serde(default = "default_name_index_limit")]
    pub name_index_limit: u32,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_sprite_base_url() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_concurrent_requests() -> usize {
    16
}

fn default_name_index_limit() -> u32 {
    1021
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sprite_base_url: default_sprite_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_concurrent_requests: default_max_concurrent_requests(),
            name_index_limit: default_name_index_limit(),
        }
    }
}

impl CatalogConfig {
    /// Build a config pointing at `base_url`, everything else default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be > 0".to_string());
        }

        if self.max_concurrent_requests == 0 {
            return Err("max_concurrent_requests must be > 0".to_string());
        }

        if self.name_index_limit == 0 {
            return Err("name_index_limit must be > 0".to_string());
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
