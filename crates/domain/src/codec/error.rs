//! Raw text decode errors

use thiserror::Error;

/// Layout hint shown to the user when an edited request cannot be decoded.
pub const EXPECTED_FORMAT: &str =
    "METHOD URL HTTP/1.1\nHeader-Name: Header-Value\n\nRequest Body";

/// A fault raised while decoding edited request text.
///
/// Malformed request lines, missing colons and stray lines are not faults;
/// the decoder absorbs them. Only input that cannot be processed as text at
/// all ends up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The edited text is not valid UTF-8.
    #[error("request text is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },
}

impl ParseError {
    /// Returns the message to display to the user, including the expected
    /// request layout.
    #[must_use]
    pub fn user_message(&self) -> String {
        format!(
            "Error parsing request: {self}\n\nPlease check the request format:\n{EXPECTED_FORMAT}"
        )
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
