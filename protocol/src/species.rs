use serde::Deserialize;
use serde::Serialize;

use crate::catalog::NamedResource;

/// Summary record of one species (`GET /pokemon/{name}`).
///
/// `height` is in decimetres and `weight` in hectograms, the service's native
/// units. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl SpeciesSummary {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|slot| slot.kind.name.as_str())
    }

    /// `None` for single-typed species.
    pub fn secondary_type(&self) -> Option<&str> {
        self.types.get(1).map(|slot| slot.kind.name.as_str())
    }

    pub fn display_asset(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }
}
