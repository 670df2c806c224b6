//! Persistence implementations for file-based storage.

mod record_store;

pub use record_store::*;
