use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request to catalog failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("catalog resource not found: {url}")]
    NotFound { url: String },

    #[error("catalog returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed catalog payload from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog base url: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// The generation roster itself could not be fetched, so no candidates exist.
#[derive(Error, Debug)]
#[error("failed to fetch roster for generation {generation}: {source}")]
pub struct RosterFetchError {
    pub generation: u32,
    #[source]
    pub source: CatalogError,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
