//! Application error types

use thiserror::Error;

use crate::ports::RecordStoreError;
use crate::session::SessionError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The edit session rejected the edit.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Loading or saving a record failed.
    #[error("storage error: {0}")]
    Storage(#[from] RecordStoreError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
