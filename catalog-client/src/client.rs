use async_trait::async_trait;
use pokedex_protocol::GenerationRoster;
use pokedex_protocol::ResourceListing;
use pokedex_protocol::SpeciesSummary;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::error::Result;
use crate::source::SpeciesSource;

/// HTTP implementation of [`SpeciesSource`] against a PokeAPI-shaped service.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        config.validate().map_err(CatalogError::InvalidConfig)?;
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|err| CatalogError::InvalidBaseUrl(format!("{}: {err}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "catalog request");
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl SpeciesSource for CatalogClient {
    async fn generation_roster(&self, generation: u32) -> Result<GenerationRoster> {
        let url = self.endpoint(&["generation", &generation.to_string()])?;
        self.get_json(url).await
    }

    async fn species(&self, name: &str) -> Result<SpeciesSummary> {
        let url = self.endpoint(&["pokemon", &name.to_lowercase()])?;
        self.get_json(url).await
    }

    async fn species_listing(&self, limit: u32) -> Result<ResourceListing> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.get_json(url).await
    }
}
