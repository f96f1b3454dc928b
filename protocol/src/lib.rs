//! Data model shared by the Pokédex search and filter crates.
//!
//! The payload types mirror the subset of the PokeAPI v2 schema the core
//! actually reads; unknown fields are ignored on deserialization.

pub mod catalog;
pub mod navigation;
pub mod species;

pub use catalog::GenerationRoster;
pub use catalog::NameEntry;
pub use catalog::NamedResource;
pub use catalog::ResourceListing;
pub use navigation::NavigationTarget;
pub use species::SpeciesSummary;
pub use species::Sprites;
pub use species::TypeSlot;
