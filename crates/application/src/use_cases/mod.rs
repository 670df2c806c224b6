//! Application use cases (business logic orchestration).

mod apply_request_edit;
mod render_request;

pub use apply_request_edit::*;
pub use render_request::*;
