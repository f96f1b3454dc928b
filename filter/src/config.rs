use pokedex_catalog_client::ConfigError;
use serde::Deserialize;
use serde::Serialize;

/// How a field that is present in the path with an empty value is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankFieldPolicy {
    /// The criterion stays active and matches no species.
    #[default]
    Active,
    /// The criterion is skipped as if the field were absent.
    Inactive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub blank_fields: BlankFieldPolicy,
}

impl FilterConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
