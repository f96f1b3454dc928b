use serde::Deserialize;
use serde::Serialize;

/// A `{ name, url }` reference as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Numeric id encoded as the last path segment of `url`
    /// (`.../pokemon/25/` → `25`).
    pub fn resource_id(&self) -> Option<u32> {
        let url = self.url.as_deref()?;
        url.trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// Paginated listing (`GET /pokemon?limit=N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListing {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

/// Payload of `GET /generation/{id}`; only the species roster is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRoster {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub pokemon_species: Vec<NamedResource>,
}

impl GenerationRoster {
    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_species.iter().map(|species| species.name.as_str())
    }
}

/// One searchable name with the asset shown next to it in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNameEntry")]
pub struct NameEntry {
    name: String,
    display_asset: String,
}

#[derive(Deserialize)]
struct RawNameEntry {
    name: String,
    display_asset: String,
}

impl From<RawNameEntry> for NameEntry {
    fn from(raw: RawNameEntry) -> Self {
        Self::new(raw.name, raw.display_asset)
    }
}

impl NameEntry {
    /// Names are stored in their canonical lowercase form.
    pub fn new(name: impl AsRef<str>, display_asset: impl Into<String>) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
            display_asset: display_asset.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_asset(&self) -> &str {
        &self.display_asset
    }
}
