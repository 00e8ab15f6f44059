//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by `TopicService`.
///
/// Only saves can fail; loads are fail-soft and never surface an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopicServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
