//! Reqnote Application - Edit sessions, use cases and ports
//!
//! This crate defines the application layer with:
//! - The transactional edit session around one request record
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{RecordStore, RecordStoreError};
pub use session::{EditForm, EditSession, RequestEdit, SessionError, SessionState};
pub use use_cases::{
    ApplyRequestEdit, ApplyRequestEditInput, ApplyRequestEditOutput, RenderRequest,
    RenderRequestOutput,
};
