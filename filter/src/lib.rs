/*!
# Pokédex filtered search

Declarative multi-criterion filtering of a generation's roster:

```text
form fields ─> FilterQueryCodec::encode ─> /filtered-search/<field>/<value>/...
                                                 │
results view <─ PredicateEvaluator <─ FilteredCollectionFetcher <─ FilterQueryCodec::decode
```

The path is the only durable state: opening a [`ResultsView`] on the same path
always reproduces the same filtered view.
*/

mod codec;
mod config;
mod criteria;
mod error;
mod evaluator;
mod results;

pub use codec::FILTERED_SEARCH_ROOT;
pub use codec::FilterQueryCodec;
pub use config::BlankFieldPolicy;
pub use config::FilterConfig;
pub use criteria::FieldValue;
pub use criteria::FilterCriteria;
pub use criteria::FilterField;
pub use error::PathDecodeError;
pub use evaluator::PredicateEvaluator;
pub use evaluator::display_case;
pub use results::ResultsState;
pub use results::ResultsView;
