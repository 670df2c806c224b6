//! Apply request edit use case.

use std::path::PathBuf;

use reqnote_domain::{RequestRecord, RequestTextCodec, VulnerabilityStatus};
use tracing::{info, warn};

use crate::error::ApplicationResult;
use crate::ports::RecordStore;
use crate::session::EditSession;

/// Input for applying an edit to a stored request.
#[derive(Debug, Clone)]
pub struct ApplyRequestEditInput {
    /// Path to the stored record.
    pub record_path: PathBuf,
    /// Edited raw request text.
    pub text: Vec<u8>,
    /// New name, or `None` to keep the current one.
    pub name: Option<String>,
    /// New notes, or `None` to keep the current ones.
    pub notes: Option<String>,
    /// New status, or `None` to keep the current one.
    pub status: Option<VulnerabilityStatus>,
}

impl ApplyRequestEditInput {
    /// Creates an input that only replaces the request text.
    #[must_use]
    pub fn new(record_path: impl Into<PathBuf>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            record_path: record_path.into(),
            text: text.into(),
            name: None,
            notes: None,
            status: None,
        }
    }
}

/// Output from applying an edit.
#[derive(Debug, Clone)]
pub struct ApplyRequestEditOutput {
    /// The record as saved.
    pub record: RequestRecord,
    /// The saved record rendered as raw request text.
    pub text: String,
}

/// Use case for committing an edit to a stored request.
pub struct ApplyRequestEdit<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ApplyRequestEdit<S> {
    /// Creates a new `ApplyRequestEdit` use case.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the record, commits the edit in a session and saves the result.
    ///
    /// If the edited text cannot be decoded the session is cancelled and
    /// nothing is written.
    ///
    /// # Errors
    /// - Returns error if the record cannot be loaded or saved
    /// - Returns error if the edited text cannot be decoded
    pub async fn execute(
        &self,
        input: ApplyRequestEditInput,
    ) -> ApplicationResult<ApplyRequestEditOutput> {
        let mut record = self.store.load(&input.record_path).await?;

        {
            let mut session = EditSession::open(&mut record);
            let mut edit = session.form().into_edit();
            edit.text = input.text;
            if let Some(name) = input.name {
                edit.name = name;
            }
            if let Some(notes) = input.notes {
                edit.notes = notes;
            }
            if let Some(status) = input.status {
                edit.status = status;
            }

            if let Err(err) = session.commit(edit) {
                warn!(path = %input.record_path.display(), "edit rejected, record left unchanged");
                session.cancel()?;
                return Err(err.into());
            }
        }

        self.store.save(&input.record_path, &record).await?;
        info!(path = %input.record_path.display(), "request saved");

        let text = RequestTextCodec::encode(&record);
        Ok(ApplyRequestEditOutput { record, text })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::RecordStoreError;
    use crate::session::SessionError;
    use crate::use_cases::test_support::MemoryStore;
    use pretty_assertions::assert_eq;
    use reqnote_domain::ParseError;

    fn stored() -> RequestRecord {
        RequestRecord::with_request_line("Search", "GET", "/search?q=1")
            .with_header("Host", "shop.test")
            .with_notes("baseline")
            .with_query_param("q", "1")
    }

    #[tokio::test]
    async fn test_apply_text_only_keeps_other_fields() {
        let store = MemoryStore::with("search.json", stored());
        let use_case = ApplyRequestEdit::new(store);

        let output = use_case
            .execute(ApplyRequestEditInput::new(
                "search.json",
                "get /search?q=1' HTTP/1.1\nHost: shop.test\nX-Probe: 1\n\n",
            ))
            .await
            .unwrap();

        assert_eq!(output.record.name, "Search");
        assert_eq!(output.record.notes, "baseline");
        assert_eq!(output.record.method.as_deref(), Some("GET"));
        assert_eq!(output.record.url.as_deref(), Some("/search?q=1'"));
        assert_eq!(output.record.headers.get("X-Probe"), Some("1"));
        assert_eq!(output.record.query_parameters.get("q"), Some("1"));
        assert_eq!(
            output.text,
            "GET /search?q=1' HTTP/1.1\nHost: shop.test\nX-Probe: 1\n\n"
        );
        assert_eq!(use_case.store.get("search.json"), Some(output.record));
        assert_eq!(use_case.store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_apply_overrides_name_notes_status() {
        let use_case = ApplyRequestEdit::new(MemoryStore::with("search.json", stored()));
        let input = ApplyRequestEditInput {
            name: Some("  Search (quote)  ".to_string()),
            notes: Some("500 on single quote".to_string()),
            status: Some(VulnerabilityStatus::Vulnerable),
            ..ApplyRequestEditInput::new("search.json", "GET /search?q=' HTTP/1.1\n\n")
        };

        let output = use_case.execute(input).await.unwrap();

        assert_eq!(output.record.name, "Search (quote)");
        assert_eq!(output.record.notes, "500 on single quote");
        assert_eq!(output.record.vulnerability_status, VulnerabilityStatus::Vulnerable);
        assert!(output.record.headers.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_edit_is_not_saved() {
        let use_case = ApplyRequestEdit::new(MemoryStore::with("search.json", stored()));
        let input = ApplyRequestEditInput {
            name: Some("Renamed".to_string()),
            ..ApplyRequestEditInput::new("search.json", vec![b'G', 0xc3])
        };

        let result = use_case.execute(input).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Session(SessionError::Parse(
                ParseError::InvalidUtf8 { valid_up_to: 1 }
            )))
        ));
        assert_eq!(use_case.store.get("search.json"), Some(stored()));
        assert_eq!(use_case.store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_to_missing_record() {
        let use_case = ApplyRequestEdit::new(MemoryStore::default());

        let result = use_case
            .execute(ApplyRequestEditInput::new("nope.json", "GET / HTTP/1.1\n\n"))
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Storage(RecordStoreError::NotFound(_)))
        ));
    }
}
