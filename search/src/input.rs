use log::debug;
use pokedex_protocol::NavigationTarget;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::config::SearchConfig;
use crate::dismissal::OutsideDismissal;
use crate::dismissal::PointerDown;
use crate::dismissal::Region;
use crate::focus::FocusChange;
use crate::focus::FocusNavigator;
use crate::focus::NavigationKey;
use crate::listeners::EventHub;
use crate::listeners::ListenerGuard;
use crate::name_index::NameIndex;
use crate::suggestion::SuggestionList;
use crate::suggestion::SuggestionMatcher;

/// Identifies the query a suggestion computation was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTicket {
    revision: u64,
    query: String,
}

impl MatchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// State of one search box: the query, its suggestions, and the highlight.
pub struct SearchInput {
    index: Arc<NameIndex>,
    matcher: SuggestionMatcher,
    strip_punctuation: bool,
    query: String,
    revision: u64,
    suggestions: SuggestionList,
    focus: FocusNavigator,
    suggested: Option<String>,
}

impl SearchInput {
    pub fn new(index: Arc<NameIndex>, config: &SearchConfig) -> Self {
        Self {
            index,
            matcher: SuggestionMatcher::new(config),
            strip_punctuation: config.strip_punctuation,
            query: String::new(),
            revision: 0,
            suggestions: SuggestionList::default(),
            focus: FocusNavigator::new(),
            suggested: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn focused_index(&self) -> usize {
        self.focus.index()
    }

    /// Name a plain submit would commit, if suggestions are showing.
    pub fn suggested(&self) -> Option<&str> {
        self.suggested.as_deref()
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggested.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Replaces the query and synchronously rebuilds the suggestion list.
    pub fn set_query(&mut self, raw: &str) {
        let ticket = self.begin_query(raw);
        let list = self.matcher.matches(&ticket.query, &self.index);
        self.commit(&ticket, list);
    }

    /// Replaces the query without computing suggestions. The returned ticket
    /// must accompany the list handed to [`SearchInput::commit`].
    pub fn begin_query(&mut self, raw: &str) -> MatchTicket {
        self.query = if self.strip_punctuation {
            strip_punctuation(raw)
        } else {
            raw.to_string()
        };
        self.revision += 1;
        MatchTicket {
            revision: self.revision,
            query: self.query.clone(),
        }
    }

    /// Installs `list` unless the query changed after `ticket` was issued.
    /// Returns whether the list was accepted.
    pub fn commit(&mut self, ticket: &MatchTicket, list: SuggestionList) -> bool {
        if ticket.revision != self.revision {
            debug!(
                "discarding stale suggestions for '{}' (revision {} < {})",
                ticket.query, ticket.revision, self.revision
            );
            return false;
        }
        self.suggested = list.first().map(|entry| entry.name().to_string());
        self.suggestions = list;
        self.focus.reset();
        true
    }

    pub fn handle_key(&mut self, key: NavigationKey) -> Option<FocusChange> {
        if self.suggestions.is_empty() {
            return None;
        }
        let change = self.focus.apply(key, self.suggestions.len())?;
        self.suggested = self
            .suggestions
            .get(change.index)
            .map(|entry| entry.name().to_string());
        Some(change)
    }

    /// Hides the suggestions; the typed query is kept.
    pub fn dismiss(&mut self) {
        self.suggested = None;
    }

    /// Target for a plain submit: the highlighted suggestion when visible,
    /// otherwise the typed query. `None` for a blank box.
    pub fn submit(&self) -> Option<NavigationTarget> {
        let name = match self.suggested.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.query.trim(),
        };
        (!name.is_empty()).then(|| NavigationTarget::species_by_name(name))
    }

    /// Target for clicking the suggestion at `index`.
    pub fn click(&self, index: usize) -> Option<NavigationTarget> {
        self.suggestions
            .get(index)
            .map(|entry| NavigationTarget::species_by_name(entry.name()))
    }
}

fn strip_punctuation(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_punctuation() || *c == '-')
        .collect()
}

fn lock(input: &Mutex<SearchInput>) -> MutexGuard<'_, SearchInput> {
    input.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted search box: its [`SearchInput`] plus the document listeners
/// (keyboard navigation and outside-press dismissal) bound for its lifetime.
///
/// Listeners are attached once in [`SearchBox::mount`] and released when the
/// box is dropped.
pub struct SearchBox {
    input: Arc<Mutex<SearchInput>>,
    _keyboard: ListenerGuard,
    _dismissal: OutsideDismissal,
}

impl SearchBox {
    pub fn mount<T, R>(
        input: SearchInput,
        keys: &EventHub<NavigationKey>,
        pointer: &EventHub<PointerDown<T>>,
        region: R,
    ) -> Self
    where
        T: 'static,
        R: Region<T> + 'static,
    {
        let input = Arc::new(Mutex::new(input));

        let for_keys = Arc::clone(&input);
        let keyboard = keys.attach(move |key: &NavigationKey| {
            lock(&for_keys).handle_key(*key);
        });

        let for_dismissal = Arc::clone(&input);
        let dismissal = OutsideDismissal::mount(pointer, region, move || {
            lock(&for_dismissal).dismiss();
        });

        Self {
            input,
            _keyboard: keyboard,
            _dismissal: dismissal,
        }
    }

    /// Runs `f` against the box's state. Must not be called from inside a
    /// listener dispatched by one of this box's hubs.
    pub fn with_input<R>(&self, f: impl FnOnce(&mut SearchInput) -> R) -> R {
        f(&mut lock(&self.input))
    }
}
