//! Encoder and decoder for the raw request text block

use super::ParseError;
use crate::request::{Headers, RequestRecord};

/// Version token written on every encoded request line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Placeholder rendered for a missing method or URL.
const MISSING: &str = "null";

/// The method and URL read from the first line of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Upper-cased method token.
    pub method: String,
    /// URL token, kept verbatim.
    pub url: String,
}

impl RequestLine {
    /// Parses `METHOD URL [VERSION]`. Returns `None` with fewer than two
    /// tokens; any token after the URL is ignored. Tokens are separated by
    /// ASCII whitespace only.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_ascii_whitespace();
        let method = tokens.next()?;
        let url = tokens.next()?;
        Some(Self {
            method: method.to_uppercase(),
            url: url.to_string(),
        })
    }
}

/// Request fields recovered from an edited text block.
///
/// Parsing never touches a record; [`ParsedRequest::apply_to`] writes the
/// result in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Method and URL, when the first line carried both.
    pub request_line: Option<RequestLine>,
    /// Headers found before the first blank line.
    pub headers: Headers,
    /// Lines after the first blank line, joined with `\n`.
    pub body: String,
}

impl ParsedRequest {
    /// Writes the parsed fields onto `record`.
    ///
    /// Headers and body are replaced wholesale. Method and URL are only
    /// replaced when the request line was complete.
    pub fn apply_to(self, record: &mut RequestRecord) {
        if let Some(line) = self.request_line {
            record.method = Some(line.method);
            record.url = Some(line.url);
        }
        record.headers = self.headers;
        record.body = self.body;
    }
}

/// Converts between [`RequestRecord`] and its raw text rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTextCodec;

impl RequestTextCodec {
    /// Renders a record as a raw request block.
    ///
    /// A missing method or URL renders as `null`. The version is always
    /// [`HTTP_VERSION`], headers follow the record's header order, and the
    /// body is appended verbatim after the blank separator line.
    #[must_use]
    pub fn encode(record: &RequestRecord) -> String {
        let mut text = String::new();
        text.push_str(record.method.as_deref().unwrap_or(MISSING));
        text.push(' ');
        text.push_str(record.url.as_deref().unwrap_or(MISSING));
        text.push(' ');
        text.push_str(HTTP_VERSION);
        text.push('\n');

        for (name, value) in record.headers.iter() {
            text.push_str(name);
            text.push_str(": ");
            text.push_str(value);
            text.push('\n');
        }

        text.push('\n');
        text.push_str(&record.body);
        text
    }

    /// Parses an edited text block.
    ///
    /// Lines are split on `\n` only, so a trailing `\r` survives in body
    /// lines, and empty text is a single empty request line. Before the
    /// first blank line, lines with a `:` become headers (split at the first
    /// colon, both sides trimmed, last duplicate wins) and all other lines
    /// are dropped. Blank means ASCII whitespace only.
    #[must_use]
    pub fn parse(text: &str) -> ParsedRequest {
        let mut lines = text.split('\n');
        let request_line = lines.next().and_then(RequestLine::parse);

        let mut headers = Headers::new();
        let mut body_lines = Vec::new();
        let mut in_body = false;

        for line in lines {
            if in_body {
                body_lines.push(line);
            } else if line.trim_ascii().is_empty() {
                in_body = true;
            } else if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim_ascii(), value.trim_ascii());
            }
        }

        ParsedRequest {
            request_line,
            headers,
            body: body_lines.join("\n"),
        }
    }

    /// Decodes edited text into `record`.
    ///
    /// The record is only modified once the whole text has been parsed, so
    /// an error leaves it exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidUtf8`] if the text is not valid UTF-8.
    pub fn decode(text: impl AsRef<[u8]>, record: &mut RequestRecord) -> Result<(), ParseError> {
        let text = std::str::from_utf8(text.as_ref())?;
        Self::parse(text).apply_to(record);
        Ok(())
    }
}
