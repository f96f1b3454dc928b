/*!
# Pokédex search box

Live name suggestions for the primary search input:

- **NameIndex**: the resident, sorted list of every searchable name
- **SuggestionMatcher**: anchored prefix matching with a leading echo entry
- **FocusNavigator**: which suggestion is highlighted
- **OutsideDismissal**: hides suggestions on pointer-down outside the box
- **SearchBox / SearchInput**: one mounted input owning its query, list and focus

## Flow

```text
keystroke ─> SearchInput::set_query
               └─> SuggestionMatcher::matches(query, NameIndex)
                     └─> SuggestionList (echo first) ─> FocusNavigator::reset
arrow key ─> EventHub<NavigationKey> ─> FocusNavigator::move_up / move_down
submit    ─> NavigationTarget (/pokemons/name/<name>)
```

Matching runs synchronously on every keystroke and never performs I/O.
*/

mod config;
mod dismissal;
mod focus;
mod input;
mod listeners;
mod name_index;
mod suggestion;

pub use config::ConfigError;
pub use config::SearchConfig;
pub use dismissal::OutsideDismissal;
pub use dismissal::PointerDown;
pub use dismissal::Region;
pub use focus::FocusChange;
pub use focus::FocusNavigator;
pub use focus::NavigationKey;
pub use input::MatchTicket;
pub use input::SearchBox;
pub use input::SearchInput;
pub use listeners::EventHub;
pub use listeners::ListenerGuard;
pub use name_index::NameIndex;
pub use suggestion::SuggestionEntry;
pub use suggestion::SuggestionKey;
pub use suggestion::SuggestionList;
pub use suggestion::SuggestionMatcher;
