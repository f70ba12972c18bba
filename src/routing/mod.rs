//! Routing module
//!
//! Maps request paths to endpoints. Matching is exact: no prefixes, no
//! trailing-slash normalization and no method-based routing.

mod table;

pub use table::{Route, ROUTES};
