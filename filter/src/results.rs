use pokedex_async_utils::OrCancelExt;
use pokedex_catalog_client::FilteredCollectionFetcher;
use pokedex_catalog_client::RosterFetchError;
use pokedex_catalog_client::SpeciesSource;
use pokedex_protocol::NavigationTarget;
use pokedex_protocol::SpeciesSummary;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::codec::FilterQueryCodec;
use crate::config::FilterConfig;
use crate::criteria::FilterCriteria;
use crate::error::PathDecodeError;
use crate::evaluator::PredicateEvaluator;

/// What a results view currently shows.
#[derive(Debug)]
pub enum ResultsState {
    Loading,
    /// The path could not be decoded; nothing was fetched.
    CannotInterpret(PathDecodeError),
    /// The generation roster could not be fetched.
    Failed(RosterFetchError),
    NoMatches,
    Matches(Vec<SpeciesSummary>),
}

impl ResultsState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ResultsState::Loading)
    }

    pub fn matches(&self) -> &[SpeciesSummary] {
        match self {
            ResultsState::Matches(species) => species,
            _ => &[],
        }
    }
}

/// Filtered results for one `/filtered-search/...` path.
///
/// The path is decoded once in [`ResultsView::open`]. State changes are
/// published on a watch channel; after [`ResultsView::dispose`] no further
/// state is written, even by a load that was already running.
pub struct ResultsView<S> {
    criteria: Result<FilterCriteria, PathDecodeError>,
    fetcher: Arc<FilteredCollectionFetcher<S>>,
    evaluator: PredicateEvaluator,
    state: watch::Sender<ResultsState>,
    cancel: CancellationToken,
}

impl<S: SpeciesSource> ResultsView<S> {
    pub fn open(
        path: &str,
        fetcher: Arc<FilteredCollectionFetcher<S>>,
        config: &FilterConfig,
    ) -> Self {
        let criteria = FilterQueryCodec::decode(path);
        let initial = match &criteria {
            Ok(_) => ResultsState::Loading,
            Err(err) => {
                warn!(path, "cannot interpret filter path: {err}");
                ResultsState::CannotInterpret(err.clone())
            }
        };
        let (state, _) = watch::channel(initial);
        Self {
            criteria,
            fetcher,
            evaluator: PredicateEvaluator::new(config),
            state,
            cancel: CancellationToken::new(),
        }
    }

    pub fn criteria(&self) -> Option<&FilterCriteria> {
        self.criteria.as_ref().ok()
    }

    pub fn subscribe(&self) -> watch::Receiver<ResultsState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> watch::Ref<'_, ResultsState> {
        self.state.borrow()
    }

    /// Target for opening the result card at `index`; cards link by id.
    pub fn select(&self, index: usize) -> Option<NavigationTarget> {
        self.state()
            .matches()
            .get(index)
            .map(|species| NavigationTarget::SpeciesById(species.id))
    }

    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Fetches the generation, applies the criteria and publishes the outcome.
    ///
    /// Does nothing for an undecodable path or a disposed view. Calling it
    /// again re-runs the whole pipeline.
    pub async fn load(&self) {
        let Ok(criteria) = &self.criteria else {
            return;
        };
        if self.is_disposed() {
            return;
        }
        self.publish(ResultsState::Loading);

        let fetched = match self
            .fetcher
            .fetch_roster(criteria.generation)
            .or_cancel(&self.cancel)
            .await
        {
            Ok(fetched) => fetched,
            Err(_) => {
                debug!(
                    generation = criteria.generation,
                    "results view disposed during load"
                );
                return;
            }
        };

        let next = match fetched {
            Err(err) => {
                warn!(generation = criteria.generation, "roster fetch failed: {err}");
                ResultsState::Failed(err)
            }
            Ok(result) => {
                let matches = self.evaluator.evaluate(criteria, result.into_summaries());
                info!(
                    generation = criteria.generation,
                    matches = matches.len(),
                    "filtered results ready"
                );
                if matches.is_empty() {
                    ResultsState::NoMatches
                } else {
                    ResultsState::Matches(matches)
                }
            }
        };
        self.publish(next);
    }

    fn publish(&self, next: ResultsState) {
        if self.is_disposed() {
            return;
        }
        self.state.send_replace(next);
    }
}
