//! Session lifecycle state and errors

use std::fmt;

use reqnote_domain::ParseError;
use thiserror::Error;

/// Lifecycle state of an [`EditSession`](super::EditSession).
///
/// `Open` is the only state that accepts a commit. A failed commit keeps the
/// session `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Edits may still be committed or cancelled.
    #[default]
    Open,
    /// The edit was applied to the record.
    Committed,
    /// The record was restored to its snapshot.
    Cancelled,
}

impl SessionState {
    /// Returns true once the session has been committed or cancelled.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        !matches!(self, Self::Open)
    }

    /// Returns the state as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Committed => "committed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by an edit session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The edited request text could not be decoded. The display text is
    /// meant to be shown to the user as-is.
    #[error("{}", .0.user_message())]
    Parse(#[from] ParseError),

    /// The session was already closed in the given state.
    #[error("edit session is already {0}")]
    Closed(SessionState),
}
