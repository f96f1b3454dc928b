use async_trait::async_trait;
use pokedex_protocol::GenerationRoster;
use pokedex_protocol::ResourceListing;
use pokedex_protocol::SpeciesSummary;
use std::sync::Arc;

use crate::error::Result;

/// Read-only access to the species catalog.
///
/// Network failures, missing records and malformed payloads all come back as
/// [`crate::CatalogError`]; callers decide whether that is fatal.
#[async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn generation_roster(&self, generation: u32) -> Result<GenerationRoster>;

    async fn species(&self, name: &str) -> Result<SpeciesSummary>;

    async fn species_listing(&self, limit: u32) -> Result<ResourceListing>;
}

#[async_trait]
impl<S> SpeciesSource for Arc<S>
where
    S: SpeciesSource + ?Sized,
{
    async fn generation_roster(&self, generation: u32) -> Result<GenerationRoster> {
        (**self).generation_roster(generation).await
    }

    async fn species(&self, name: &str) -> Result<SpeciesSummary> {
        (**self).species(name).await
    }

    async fn species_listing(&self, limit: u32) -> Result<ResourceListing> {
        (**self).species_listing(limit).await
    }
}
