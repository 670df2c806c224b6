//! Snapshot, commit and rollback around one record edit

use reqnote_domain::{RequestRecord, RequestTextCodec};
use tracing::{debug, info, warn};

use super::{EditForm, RequestEdit, SessionError, SessionState};

/// An in-progress edit of one [`RequestRecord`].
///
/// The session mutably borrows the record for its whole lifetime, so no
/// other code can touch the record (or open a second session on it) until
/// the session is dropped.
///
/// Transitions:
/// - `Open` + successful [`commit`](Self::commit) → `Committed`
/// - `Open` + failed commit → `Open` (retry or cancel)
/// - `Open` or `Cancelled` + [`cancel`](Self::cancel) → `Cancelled`
///
/// Any other call returns [`SessionError::Closed`] without touching the
/// record.
#[derive(Debug)]
pub struct EditSession<'a> {
    record: &'a mut RequestRecord,
    snapshot: RequestRecord,
    state: SessionState,
}

impl<'a> EditSession<'a> {
    /// Opens a session, taking a deep snapshot of `record`.
    pub fn open(record: &'a mut RequestRecord) -> Self {
        debug!(name = %record.name, "opening edit session");
        let snapshot = record.clone();
        Self {
            record,
            snapshot,
            state: SessionState::Open,
        }
    }

    /// Returns the live record.
    #[must_use]
    pub fn record(&self) -> &RequestRecord {
        &*self.record
    }

    /// Returns the live record for in-place edits.
    pub fn record_mut(&mut self) -> &mut RequestRecord {
        &mut *self.record
    }

    /// Returns the record as it was when the session opened.
    #[must_use]
    pub const fn snapshot(&self) -> &RequestRecord {
        &self.snapshot
    }

    /// Renders the live record as raw request text.
    #[must_use]
    pub fn text(&self) -> String {
        RequestTextCodec::encode(&*self.record)
    }

    /// Returns the pre-filled editing form for the live record.
    #[must_use]
    pub fn form(&self) -> EditForm {
        EditForm::from_record(&*self.record)
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true if the edit was committed.
    #[must_use]
    pub fn was_saved(&self) -> bool {
        self.state == SessionState::Committed
    }

    /// Applies the user's edits to the live record.
    ///
    /// Name, notes and status are written first and stay applied even if
    /// the request text fails to decode. Method, URL, headers and body are
    /// replaced only when the text decodes.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Parse`] if the text cannot be decoded; the session
    ///   stays open.
    /// - [`SessionError::Closed`] if the session is no longer open.
    pub fn commit(&mut self, edit: RequestEdit) -> Result<(), SessionError> {
        if self.state.is_closed() {
            return Err(SessionError::Closed(self.state));
        }

        let RequestEdit {
            text,
            name,
            notes,
            status,
        } = edit;

        self.record.name = name.trim().to_string();
        self.record.notes = notes;
        self.record.vulnerability_status = status;

        match RequestTextCodec::decode(&text, &mut *self.record) {
            Ok(()) => {
                self.state = SessionState::Committed;
                info!(
                    name = %self.record.name,
                    headers = self.record.headers.len(),
                    "edit committed"
                );
                Ok(())
            }
            Err(err) => {
                warn!(name = %self.record.name, error = %err, "request text rejected");
                Err(SessionError::Parse(err))
            }
        }
    }

    /// Restores every field of the live record from the snapshot.
    ///
    /// Cancelling an already cancelled session applies the snapshot again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session was committed.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if self.state == SessionState::Committed {
            return Err(SessionError::Closed(self.state));
        }

        *self.record = self.snapshot.clone();
        self.state = SessionState::Cancelled;
        info!(name = %self.record.name, "edit cancelled");
        Ok(())
    }
}
