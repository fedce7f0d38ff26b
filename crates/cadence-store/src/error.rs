//! Error types for event storage.

use thiserror::Error;
use uuid::Uuid;

/// Failures while reading or mutating an event store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store file holds something other than an event list.
    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No stored event carries the requested id.
    #[error("no event with id {0}")]
    NotFound(Uuid),
}

/// Convenience alias used throughout cadence-store.
pub type Result<T> = std::result::Result<T, StoreError>;
