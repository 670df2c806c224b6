//! Reqnote Domain - Core request types
//!
//! This crate defines the captured-request record edited by Reqnote and the
//! codec that renders it to (and parses it from) a raw HTTP-like text block.
//! All types here are pure Rust with no I/O dependencies.

pub mod codec;
pub mod error;
pub mod request;

pub use codec::{ParseError, ParsedRequest, RequestLine, RequestTextCodec};
pub use error::{DomainError, DomainResult};
pub use request::{Headers, QueryParameters, RequestRecord, VulnerabilityStatus};
