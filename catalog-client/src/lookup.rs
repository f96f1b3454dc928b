use pokedex_protocol::SpeciesSummary;
use tracing::warn;

use crate::error::CatalogError;
use crate::source::SpeciesSource;

/// Result of resolving a submitted name to a species record.
#[derive(Debug)]
pub enum LookupStatus {
    Found(SpeciesSummary),
    /// No record exists for the name. Not retried.
    NotFound { name: String },
    Failed(CatalogError),
}

pub async fn lookup_species<S>(source: &S, name: &str) -> LookupStatus
where
    S: SpeciesSource + ?Sized,
{
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return LookupStatus::NotFound { name };
    }
    match source.species(&name).await {
        Ok(summary) => LookupStatus::Found(summary),
        Err(err) if err.is_not_found() => LookupStatus::NotFound { name },
        Err(err) => {
            warn!(species = %name, "species lookup failed: {err}");
            LookupStatus::Failed(err)
        }
    }
}
