//! Boundary to the remote species catalog.
//!
//! [`SpeciesSource`] is the seam the rest of the workspace talks to;
//! [`CatalogClient`] implements it over HTTP. On top of that seam sit the
//! failure-tolerant [`FilteredCollectionFetcher`], the name-index loader used
//! by the search box, and the single-species lookup behind a committed
//! suggestion.

mod client;
mod config;
mod error;
mod fetcher;
mod listing;
mod lookup;
mod source;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use error::ConfigError;
pub use error::Result;
pub use error::RosterFetchError;
pub use fetcher::FilteredCollectionFetcher;
pub use fetcher::RosterFetchResult;
pub use fetcher::SpeciesOutcome;
pub use listing::load_name_entries;
pub use lookup::LookupStatus;
pub use lookup::lookup_species;
pub use source::SpeciesSource;
