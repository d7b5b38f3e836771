use std::collections::TryReserveError;

/// Result type for list operations.
pub type Result<T, E = ListError> = std::result::Result<T, E>;

/// Errors returned by [`OrderedWordList`](crate::OrderedWordList) operations.
///
/// Every failing call leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("word must not be empty")]
    EmptyWord,

    #[error("cannot search an empty list")]
    EmptyList,

    #[error("node handle was issued by another list or before the last clear")]
    StaleHandle,

    #[error("failed to allocate a list node: {0}")]
    Alloc(#[from] TryReserveError),
}
