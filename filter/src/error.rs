use thiserror::Error;

/// A filter path that cannot be turned into criteria.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathDecodeError {
    #[error("not a filtered-search path: {0}")]
    NotFilteredSearchPath(String),

    #[error("filter path has {count} segments; expected field/value pairs")]
    OddSegmentCount { count: usize },

    #[error("filter path does not name a generation")]
    MissingGeneration,

    #[error("invalid value {value:?} for filter field {field}")]
    InvalidValue { field: String, value: String },
}
