use std::fmt;

use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;
use percent_encoding::utf8_percent_encode;

/// Characters escaped inside a single path segment.
pub const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the browser goes after a search is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    SpeciesByName(String),
    SpeciesById(u32),
}

impl NavigationTarget {
    /// The profile view keys species by their lowercase name.
    pub fn species_by_name(name: &str) -> Self {
        Self::SpeciesByName(name.to_lowercase())
    }

    pub fn path(&self) -> String {
        match self {
            Self::SpeciesByName(name) => {
                format!("/pokemons/name/{}", utf8_percent_encode(name, PATH_SEGMENT))
            }
            Self::SpeciesById(id) => format!("/pokemons/id/{id}"),
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
