//! Person record displayed by the people table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::sort::{SortColumn, SortKey};

/// One person in the directory.
///
/// All four fields are plain display strings. `email` doubles as the
/// record's stable identity within the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Person {
    /// Full display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Job title.
    #[schema(example = "Principal Research Engineer")]
    pub title: String,
    /// Email address; stable row identity within the roster.
    #[schema(example = "ada.lovelace@example.com")]
    pub email: String,
    /// Job role.
    #[schema(example = "Engineer")]
    pub role: String,
}

impl Person {
    /// Build a person from its four display fields.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Value of the given column for this record.
    pub fn column_value(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Name => &self.name,
            SortColumn::Title => &self.title,
            SortColumn::Email => &self.email,
            SortColumn::Role => &self.role,
        }
    }

    /// Value addressed by a parsed sort key.
    ///
    /// Unknown keys read no value, which degrades the comparator to "no
    /// ordering information" instead of failing the request.
    pub fn sort_value(&self, key: &SortKey) -> Option<&str> {
        key.column().map(|column| self.column_value(column))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn person() -> Person {
        Person::new(
            "Ada Lovelace",
            "Principal Research Engineer",
            "ada.lovelace@example.com",
            "Engineer",
        )
    }

    #[rstest]
    #[case(SortColumn::Name, "Ada Lovelace")]
    #[case(SortColumn::Title, "Principal Research Engineer")]
    #[case(SortColumn::Email, "ada.lovelace@example.com")]
    #[case(SortColumn::Role, "Engineer")]
    fn column_value_reads_the_matching_field(#[case] column: SortColumn, #[case] expected: &str) {
        assert_eq!(person().column_value(column), expected);
    }

    #[rstest]
    fn sort_value_reads_known_columns() {
        let key = SortKey::Column(SortColumn::Email);

        assert_eq!(person().sort_value(&key), Some("ada.lovelace@example.com"));
    }

    #[rstest]
    fn sort_value_is_absent_for_unknown_keys() {
        let key = SortKey::Unknown("bogusfield".to_owned());

        assert_eq!(person().sort_value(&key), None);
    }
}
