//! Error hierarchy for configuration loading and the document collections.
//!
//! Failures raised by operations wrapped in a [`QueryLogger`](crate::QueryLogger)
//! never pass through these types; the logger hands them back untouched.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration sources failed to load or deserialize
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Document collection failures
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// A document with the same id is already stored
    #[error("{model} with id {id} already exists")]
    DuplicateId { model: &'static str, id: u64 },

    /// No document with the given id is stored
    #[error("{model} with id {id} not found")]
    NotFound { model: &'static str, id: u64 },
}
