//! Captured request record

use serde::{Deserialize, Serialize};

use super::{Headers, QueryParameters, VulnerabilityStatus};

/// A captured HTTP request together with the tester's findings.
///
/// The record is a plain value: it performs no validation, and the raw text
/// codec is the only place where its request fields are interpreted.
/// Cloning produces independent copies of every field, including the
/// header and query parameter maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Human-readable request name.
    #[serde(default)]
    pub name: String,

    /// HTTP method, conventionally an upper-case verb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Request URL, stored exactly as captured or typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request headers in display order.
    #[serde(default, skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,

    /// Request body; empty when the request has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    /// Free-text testing notes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    /// Vulnerability classification tag.
    #[serde(default)]
    pub vulnerability_status: VulnerabilityStatus,

    /// Description imported with the request.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Folder the request lives in inside its collection.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub folder_path: String,

    /// Query parameters imported with the request.
    #[serde(default, skip_serializing_if = "QueryParameters::is_empty")]
    pub query_parameters: QueryParameters,
}

impl RequestRecord {
    /// Creates an empty record with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a record for `method url`.
    #[must_use]
    pub fn with_request_line(
        name: impl Into<String>,
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            ..Self::new(name)
        }
    }

    /// Adds a header to the record.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a query parameter to the record.
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(name, value);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the testing notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the vulnerability classification.
    #[must_use]
    pub fn with_status(mut self, status: VulnerabilityStatus) -> Self {
        self.vulnerability_status = status;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the collection folder path.
    #[must_use]
    pub fn with_folder_path(mut self, folder_path: impl Into<String>) -> Self {
        self.folder_path = folder_path.into();
        self
    }
}
