//! HTTP protocol layer module
//!
//! Status code table, content negotiation, query parsing and response
//! building, decoupled from the individual endpoints.

pub mod negotiate;
pub mod payload;
pub mod query;
pub mod response;
pub mod status;

// Re-export commonly used types
pub use negotiate::Representation;
pub use payload::Payload;
pub use query::query_param;
pub use response::{build_asset_response, build_payload_response};
pub use status::ResponseCode;
