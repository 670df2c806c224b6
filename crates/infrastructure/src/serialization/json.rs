//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Field and map order taken from the source types
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Serializes a value to deterministic JSON bytes.
///
/// Same as `to_json_stable` but returns bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let json = to_json_stable(value)?;
    Ok(json.into_bytes())
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqnote_domain::{RequestRecord, VulnerabilityStatus};

    fn record() -> RequestRecord {
        RequestRecord::with_request_line("Login", "POST", "/login")
            .with_header("Host", "target.test")
            .with_header("Content-Type", "application/json")
            .with_body("{}")
            .with_status(VulnerabilityStatus::Safe)
    }

    #[test]
    fn test_stable_serialization_has_trailing_newline() {
        let json = to_json_stable(&record()).expect("serialization should work");
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_stable_serialization_uses_two_space_indent() {
        let json = to_json_stable(&record()).expect("serialization should work");
        assert!(json.contains("\n  \"name\": \"Login\""));
        assert!(json.contains("\n    \"Host\": \"target.test\""));
    }

    #[test]
    fn test_header_order_is_preserved() {
        let json = to_json_stable(&record()).expect("serialization should work");
        let host_pos = json.find("\"Host\"").expect("Host should be in json");
        let type_pos = json.find("\"Content-Type\"").expect("Content-Type should be in json");
        assert!(host_pos < type_pos);
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let json = to_json_stable(&RequestRecord::new("Bare")).expect("serialization should work");
        assert_eq!(json, "{\n  \"name\": \"Bare\",\n  \"vulnerability_status\": \"\"\n}\n");
    }

    #[test]
    fn test_roundtrip_serialization() {
        let bytes = to_json_stable_bytes(&record()).expect("serialization should work");
        let restored: RequestRecord = from_json_bytes(&bytes).expect("deserialization should work");
        assert_eq!(restored, record());
    }

    #[test]
    fn test_from_json_bytes_rejects_wrong_shape() {
        let result = from_json_bytes::<RequestRecord>(br#"{"name": 42}"#);
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
