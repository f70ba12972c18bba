//! Request handler module
//!
//! Route dispatch, the demo endpoint handlers and the pre-loaded static assets.

pub mod responses;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
pub use static_files::StaticAssets;
