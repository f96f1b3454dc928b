use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Behaviour of the suggestion box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Asset shown next to the echo entry
    #[serde(default = "default_placeholder_asset")]
    pub placeholder_asset: String,

    /// Cap on real matches shown under the echo (`None` = all)
    #[serde(default)]
    pub max_matches: Option<usize>,

    /// Drop ASCII punctuation (except `-`) from typed input
    #[serde(default = "default_true")]
    pub strip_punctuation: bool,
}

fn default_placeholder_asset() -> String {
    "assets/no-image-placeholder.png".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placeholder_asset: default_placeholder_asset(),
            max_matches: None,
            strip_punctuation: true,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_matches == Some(0) {
            return Err("max_matches must be > 0 when set".to_string());
        }
        Ok(())
    }
}
