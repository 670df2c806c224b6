//! Deterministic JSON serialization for stored records.
//!
//! Keeps record files diff-friendly by:
//! - Preserving header order and sorting query parameters
//! - Using 2-space indentation
//! - Adding trailing newline

mod json;

pub use json::*;
