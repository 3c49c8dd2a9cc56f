//! Actix middleware shared by the HTTP surface.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdentity};
