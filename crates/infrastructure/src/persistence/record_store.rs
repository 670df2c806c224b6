//! File system based record store implementation.
//!
//! Each record is one JSON document on disk.

use std::path::Path;

use reqnote_application::ports::{RecordStore, RecordStoreError};
use reqnote_domain::RequestRecord;
use tokio::fs;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Stores records as pretty-printed JSON files using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct FileSystemRecordStore;

impl FileSystemRecordStore {
    /// Creates a new `FileSystemRecordStore`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RecordStore for FileSystemRecordStore {
    async fn load(&self, path: &Path) -> Result<RequestRecord, RecordStoreError> {
        let bytes = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecordStoreError::NotFound(path.to_path_buf())
            } else {
                RecordStoreError::Io(e)
            }
        })?;

        let record = from_json_bytes(&bytes).map_err(|e| RecordStoreError::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded record");
        Ok(record)
    }

    async fn save(&self, path: &Path, record: &RequestRecord) -> Result<(), RecordStoreError> {
        let bytes = to_json_stable_bytes(record).map_err(|e| RecordStoreError::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, bytes).await?;
        debug!(path = %path.display(), "saved record");
        Ok(())
    }
}
