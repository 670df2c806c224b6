//! Raw request text codec
//!
//! Converts a [`RequestRecord`](crate::RequestRecord) to the plain-text block
//! shown in an editor, and parses an edited block back into the record:
//!
//! ```text
//! METHOD URL HTTP/1.1
//! Header-Name: Header-Value
//!
//! Request Body
//! ```
//!
//! The mapping is lossy and lenient. Malformed lines are absorbed by fixed
//! fallback rules instead of being reported as errors.

mod error;
mod raw_text;

pub use error::{EXPECTED_FORMAT, ParseError};
pub use raw_text::{HTTP_VERSION, ParsedRequest, RequestLine, RequestTextCodec};
