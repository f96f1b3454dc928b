use pokedex_protocol::NameEntry;
use std::ops::Range;

/// Every searchable name, sorted by name and deduplicated.
///
/// Built once per session and shared read-only (`Arc<NameIndex>`) by every
/// search input.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: Vec<NameEntry>,
}

impl NameIndex {
    pub fn new(entries: impl IntoIterator<Item = NameEntry>) -> Self {
        let mut entries: Vec<NameEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        // First occurrence of a duplicate name wins.
        entries.dedup_by(|later, earlier| later.name() == earlier.name());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&NameEntry> {
        self.entries
            .binary_search_by(|entry| entry.name().cmp(name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Entries whose name starts with `prefix` (already lowercase), in index
    /// order.
    pub fn with_prefix(&self, prefix: &str) -> &[NameEntry] {
        &self.entries[self.prefix_range(prefix)]
    }

    fn prefix_range(&self, prefix: &str) -> Range<usize> {
        let start = self
            .entries
            .partition_point(|entry| entry.name() < prefix);
        let len = self.entries[start..]
            .iter()
            .take_while(|entry| entry.name().starts_with(prefix))
            .count();
        start..start + len
    }
}

impl FromIterator<NameEntry> for NameIndex {
    fn from_iter<T: IntoIterator<Item = NameEntry>>(iter: T) -> Self {
        Self::new(iter)
    }
}
