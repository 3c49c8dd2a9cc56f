//! Transport-agnostic domain types for the people table.

mod error;
mod person;
pub mod ports;
pub mod sort;

pub use error::{Error, ErrorCode};
pub use person::Person;
pub use sort::{SortColumn, SortKey, SortState, sorted_view};
