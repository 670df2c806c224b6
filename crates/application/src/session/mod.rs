//! Transactional editing of a single request record.
//!
//! An [`EditSession`] snapshots a record when it opens. Committing applies the
//! edited name, notes, status and raw request text; cancelling restores the
//! snapshot. The record is never left half-updated by a failed decode.

mod edit_session;
mod form;
mod state;

pub use edit_session::EditSession;
pub use form::{EditForm, RequestEdit};
pub use state::{SessionError, SessionState};
