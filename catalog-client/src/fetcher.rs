use pokedex_async_utils::settle_all;
use pokedex_protocol::SpeciesSummary;
use tracing::info;
use tracing::warn;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::error::RosterFetchError;
use crate::source::SpeciesSource;

/// Outcome of fetching one roster member.
#[derive(Debug)]
pub enum SpeciesOutcome {
    Resolved(SpeciesSummary),
    Failed { name: String, error: CatalogError },
}

/// Every member of a generation's roster, each either resolved or failed, in
/// roster order.
#[derive(Debug)]
pub struct RosterFetchResult {
    pub generation: u32,
    pub outcomes: Vec<SpeciesOutcome>,
}

impl RosterFetchResult {
    pub fn resolved(&self) -> impl Iterator<Item = &SpeciesSummary> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SpeciesOutcome::Resolved(summary) => Some(summary),
            SpeciesOutcome::Failed { .. } => None,
        })
    }

    pub fn failed_names(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SpeciesOutcome::Failed { name, .. } => Some(name.as_str()),
            SpeciesOutcome::Resolved(_) => None,
        })
    }

    /// Drops failed members, keeping each resolved summary exactly once.
    pub fn into_summaries(self) -> Vec<SpeciesSummary> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                SpeciesOutcome::Resolved(summary) => Some(summary),
                SpeciesOutcome::Failed { .. } => None,
            })
            .collect()
    }
}

/// Retrieves a generation's roster and the summary of every species on it.
///
/// Only the roster call is fatal. Individual species are fetched concurrently
/// (bounded by `max_concurrent_requests`) and a member that fails is recorded
/// as [`SpeciesOutcome::Failed`] instead of aborting the batch.
pub struct FilteredCollectionFetcher<S> {
    source: S,
    max_concurrent_requests: usize,
}

impl<S: SpeciesSource> FilteredCollectionFetcher<S> {
    pub fn new(source: S, config: &CatalogConfig) -> Self {
        Self {
            source,
            max_concurrent_requests: config.max_concurrent_requests,
        }
    }

    pub async fn fetch_roster(
        &self,
        generation: u32,
    ) -> Result<RosterFetchResult, RosterFetchError> {
        let roster = self
            .source
            .generation_roster(generation)
            .await
            .map_err(|source| RosterFetchError { generation, source })?;

        let names: Vec<String> = roster.species_names().map(str::to_string).collect();
        info!(
            generation,
            species = names.len(),
            "fetching species summaries for generation"
        );

        let requests: Vec<_> = names.iter().map(|name| self.source.species(name)).collect();
        // Boxed as `dyn Send` so the `Send` check runs with concrete lifetimes
        // (works around rustc's higher-ranked auto-trait inference limitation).
        let settled: std::pin::Pin<
            Box<
                dyn std::future::Future<Output = Vec<Result<SpeciesSummary, CatalogError>>>
                    + Send
                    + '_,
            >,
        > = Box::pin(settle_all(requests, self.max_concurrent_requests));
        let settled = settled.await;

        let outcomes: Vec<SpeciesOutcome> = names
            .into_iter()
            .zip(settled)
            .map(|(name, result)| match result {
                Ok(summary) => SpeciesOutcome::Resolved(summary),
                Err(error) => {
                    warn!(generation, species = %name, "dropping species: {error}");
                    SpeciesOutcome::Failed { name, error }
                }
            })
            .collect();

        let result = RosterFetchResult {
            generation,
            outcomes,
        };
        info!(
            generation,
            resolved = result.resolved().count(),
            failed = result.failed_names().count(),
            "generation roster settled"
        );
        Ok(result)
    }
}
