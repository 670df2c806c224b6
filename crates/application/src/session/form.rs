//! Values exchanged with the editing surface

use reqnote_domain::{RequestRecord, RequestTextCodec, VulnerabilityStatus};

/// Initial field values for an editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// Window or panel title.
    pub title: String,
    /// Request name field.
    pub name: String,
    /// Testing notes field.
    pub notes: String,
    /// Selected vulnerability status.
    pub status: VulnerabilityStatus,
    /// Raw request text area.
    pub text: String,
}

impl EditForm {
    /// Builds the form for `record`.
    #[must_use]
    pub fn from_record(record: &RequestRecord) -> Self {
        Self {
            title: format!("Edit Request - {}", record.name),
            name: record.name.clone(),
            notes: record.notes.clone(),
            status: record.vulnerability_status,
            text: RequestTextCodec::encode(record),
        }
    }

    /// Turns the (possibly edited) form into a commit request.
    #[must_use]
    pub fn into_edit(self) -> RequestEdit {
        RequestEdit {
            text: self.text.into_bytes(),
            name: self.name,
            notes: self.notes,
            status: self.status,
        }
    }
}

/// The user's edits, submitted on commit.
///
/// `text` is raw bytes as produced by the editing surface; it is decoded as
/// UTF-8 during the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEdit {
    /// Edited raw request text.
    pub text: Vec<u8>,
    /// Edited request name. Surrounding whitespace is trimmed on commit.
    pub name: String,
    /// Edited testing notes, stored verbatim.
    pub notes: String,
    /// Selected vulnerability status.
    pub status: VulnerabilityStatus,
}

impl RequestEdit {
    /// Creates an edit from its parts.
    #[must_use]
    pub fn new(
        text: impl Into<Vec<u8>>,
        name: impl Into<String>,
        notes: impl Into<String>,
        status: VulnerabilityStatus,
    ) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
            notes: notes.into(),
            status,
        }
    }
}
