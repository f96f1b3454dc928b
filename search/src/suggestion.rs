use log::debug;
use pokedex_protocol::NameEntry;
use std::ops::Deref;

use crate::config::SearchConfig;
use crate::name_index::NameIndex;

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// The raw query itself, offered as "search exactly what I typed".
    Echo { text: String, display_asset: String },
    Match(NameEntry),
}

/// Render key of a suggestion. The echo key can never equal a real name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKey<'a> {
    Echo,
    Name(&'a str),
}

impl SuggestionEntry {
    pub fn name(&self) -> &str {
        match self {
            SuggestionEntry::Echo { text, .. } => text,
            SuggestionEntry::Match(entry) => entry.name(),
        }
    }

    pub fn display_asset(&self) -> &str {
        match self {
            SuggestionEntry::Echo { display_asset, .. } => display_asset,
            SuggestionEntry::Match(entry) => entry.display_asset(),
        }
    }

    pub fn key(&self) -> SuggestionKey<'_> {
        match self {
            SuggestionEntry::Echo { .. } => SuggestionKey::Echo,
            SuggestionEntry::Match(entry) => SuggestionKey::Name(entry.name()),
        }
    }

    pub fn is_echo(&self) -> bool {
        matches!(self, SuggestionEntry::Echo { .. })
    }
}

/// Ordered suggestions derived from one query. Rebuilt, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    entries: Vec<SuggestionEntry>,
}

impl SuggestionList {
    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    /// Real catalog matches, without the echo.
    pub fn matches(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            SuggestionEntry::Match(name) => Some(name),
            SuggestionEntry::Echo { .. } => None,
        })
    }
}

impl Deref for SuggestionList {
    type Target = [SuggestionEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

/// Anchored, case-insensitive prefix matcher over a [`NameIndex`].
#[derive(Debug, Clone)]
pub struct SuggestionMatcher {
    placeholder_asset: String,
    max_matches: Option<usize>,
}

impl Default for SuggestionMatcher {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl SuggestionMatcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            placeholder_asset: config.placeholder_asset.clone(),
            max_matches: config.max_matches,
        }
    }

    /// Suggestions for `query`: empty for an empty query, otherwise the echo
    /// entry followed by every indexed name starting with the lowercase query.
    pub fn matches(&self, query: &str, index: &NameIndex) -> SuggestionList {
        if query.is_empty() {
            return SuggestionList::default();
        }

        let prefix = query.to_lowercase();
        let hits = index.with_prefix(&prefix);
        let limit = self.max_matches.unwrap_or(hits.len()).min(hits.len());

        let mut entries = Vec::with_capacity(limit + 1);
        entries.push(SuggestionEntry::Echo {
            text: query.to_string(),
            display_asset: self.placeholder_asset.clone(),
        });
        entries.extend(hits[..limit].iter().cloned().map(SuggestionEntry::Match));

        debug!("suggestions for '{query}': {limit} of {} matches", hits.len());
        SuggestionList { entries }
    }
}
