//! Render request use case.

use std::path::Path;

use reqnote_domain::{RequestRecord, RequestTextCodec};
use tracing::debug;

use crate::error::ApplicationResult;
use crate::ports::RecordStore;

/// Output from rendering a stored request.
#[derive(Debug, Clone)]
pub struct RenderRequestOutput {
    /// The stored record.
    pub record: RequestRecord,
    /// The record rendered as raw request text.
    pub text: String,
}

/// Use case for showing a stored request as raw text.
pub struct RenderRequest<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RenderRequest<S> {
    /// Creates a new `RenderRequest` use case.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the record at `record_path` and renders it.
    ///
    /// # Errors
    /// - Returns error if the record cannot be loaded
    pub async fn execute(&self, record_path: &Path) -> ApplicationResult<RenderRequestOutput> {
        let record = self.store.load(record_path).await?;
        let text = RequestTextCodec::encode(&record);
        debug!(path = %record_path.display(), bytes = text.len(), "rendered request");
        Ok(RenderRequestOutput { record, text })
    }
}
