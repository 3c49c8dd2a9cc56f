//! Generated people record types.
//!
//! Output types for roster generation, kept free of backend domain types so
//! the crate can be consumed without a dependency cycle.

use serde::{Deserialize, Serialize};

/// A generated example person record.
///
/// The `email` value is unique within a generated roster and is intended to
/// serve as the record's stable identity.
///
/// # Example
///
/// ```
/// use example_data::PersonRecord;
///
/// let person = PersonRecord {
///     name: "Ada Lovelace".to_owned(),
///     title: "Principal Research Engineer".to_owned(),
///     email: "ada.lovelace@example.com".to_owned(),
///     role: "Engineer".to_owned(),
/// };
///
/// assert_eq!(person.email, "ada.lovelace@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Full display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Lowercase email address, unique within the roster.
    pub email: String,
    /// Job role.
    pub role: String,
}
