//! Record storage port.

use std::path::{Path, PathBuf};

use reqnote_domain::RequestRecord;

/// Error type for record storage operations.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    /// No record exists at the path.
    #[error("Record not found: {0}")]
    NotFound(PathBuf),

    /// The stored document is not a valid record.
    #[error("Invalid record file {path}: {reason}")]
    InvalidRecord {
        /// Path of the offending file.
        path: PathBuf,
        /// What went wrong while reading or writing it.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads and saves request records.
///
/// Implemented by the infrastructure layer; mocked in tests.
pub trait RecordStore: Send + Sync {
    /// Loads the record stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or cannot be parsed.
    fn load(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<RequestRecord, RecordStoreError>> + Send;

    /// Saves `record` at `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(
        &self,
        path: &Path,
        record: &RequestRecord,
    ) -> impl std::future::Future<Output = Result<(), RecordStoreError>> + Send;
}
