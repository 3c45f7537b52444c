use thiserror::Error;

/// Errors from skill record persistence (used by the store trait in
/// grimoire-core).
///
/// A lookup that finds no row is not an error; it surfaces as `None` at the
/// store and cache surfaces.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    /// An update or delete touched no row.
    #[error("skill record not found")]
    NotFound,
}

/// Errors from decoding or encoding a persisted skill layout.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed skill layout: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("skill layout must hold {expected} slots, got {got}")]
    SlotCount { expected: usize, got: usize },
}
