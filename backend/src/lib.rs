//! People directory backend library modules.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;

/// Request correlation middleware applied to the whole app.
pub use middleware::RequestIdentity;
