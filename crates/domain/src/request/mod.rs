//! Captured request domain types

mod header;
mod query;
mod record;
mod status;

pub use header::Headers;
pub use query::QueryParameters;
pub use record::RequestRecord;
pub use status::VulnerabilityStatus;
