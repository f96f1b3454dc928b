use pokedex_protocol::NameEntry;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::source::SpeciesSource;

/// Loads the full name list the search box matches against.
///
/// The thumbnail of each entry is derived from the resource id in its URL;
/// entries without a parseable id get `placeholder_asset`.
pub async fn load_name_entries<S>(
    source: &S,
    config: &CatalogConfig,
    placeholder_asset: &str,
) -> Result<Vec<NameEntry>>
where
    S: SpeciesSource + ?Sized,
{
    let listing = source.species_listing(config.name_index_limit).await?;
    let sprite_base = config.sprite_base_url.trim_end_matches('/');
    let entries: Vec<NameEntry> = listing
        .results
        .iter()
        .map(|resource| {
            let asset = match resource.resource_id() {
                Some(id) => format!("{sprite_base}/{id}.png"),
                None => placeholder_asset.to_string(),
            };
            NameEntry::new(&resource.name, asset)
        })
        .collect();
    debug!(count = entries.len(), "loaded name index entries");
    Ok(entries)
}
