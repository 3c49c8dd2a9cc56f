//! Sort state for the people table.
//!
//! The current ordering is carried entirely in the `sort` query parameter:
//! `<field>` sorts ascending, `<field>:desc` descending, and absence of the
//! parameter leaves the roster in its natural input order. The state is
//! derived from the query string on every request and never stored.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Person;

/// The four sortable columns of the people table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Full display name.
    Name,
    /// Job title.
    Title,
    /// Email address.
    Email,
    /// Job role.
    Role,
}

impl SortColumn {
    /// All columns in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Title, Self::Email, Self::Role];

    /// Wire name of the column, as it appears in the `sort` parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Email => "email",
            Self::Role => "role",
        }
    }

    /// Map a raw field name onto a known column.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::Name),
            "title" => Some(Self::Title),
            "email" => Some(Self::Email),
            "role" => Some(Self::Role),
            _ => None,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed sort field: one of the known columns, or a tolerated unknown
/// name.
///
/// Unknown names never match a column and never read a value from a record,
/// so they leave the roster order untouched instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// One of the four known columns.
    Column(SortColumn),
    /// An unrecognised field name, kept verbatim.
    Unknown(String),
}

impl SortKey {
    fn parse(raw: &str) -> Self {
        SortColumn::parse(raw).map_or_else(|| Self::Unknown(raw.to_owned()), Self::Column)
    }

    /// The column this key addresses, when it is a known one.
    pub fn column(&self) -> Option<SortColumn> {
        match self {
            Self::Column(column) => Some(*column),
            Self::Unknown(_) => None,
        }
    }
}

/// The sort state derived from the current query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<SortKey>,
    descending: bool,
}

impl SortState {
    /// Natural input order: no active key.
    pub fn natural() -> Self {
        Self::default()
    }

    /// Ascending sort by a known column.
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            key: Some(SortKey::Column(column)),
            descending: false,
        }
    }

    /// Descending sort by a known column.
    pub fn descending(column: SortColumn) -> Self {
        Self {
            key: Some(SortKey::Column(column)),
            descending: true,
        }
    }

    /// Derive the state from the raw `sort` query parameter value.
    ///
    /// An absent parameter means natural order. Otherwise the text before
    /// the first `:` names the field, the segment straight after it must be
    /// the literal `desc` to select descending, and any later segments are
    /// ignored. Unrecognised field names parse to [`SortKey::Unknown`].
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::natural();
        };

        let mut segments = raw.split(':');
        let field = segments.next().unwrap_or(raw);
        let descending = segments.next() == Some("desc");

        Self {
            key: Some(SortKey::parse(field)),
            descending,
        }
    }

    /// The parsed key, absent for natural order.
    pub fn key(&self) -> Option<&SortKey> {
        self.key.as_ref()
    }

    /// Whether descending order is selected.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// The active known column, if the current key addresses one.
    pub fn active_column(&self) -> Option<SortColumn> {
        self.key.as_ref().and_then(SortKey::column)
    }

    /// Whether the given column is the active sort field.
    pub fn is_active(&self, column: SortColumn) -> bool {
        self.active_column() == Some(column)
    }

    /// Next state when the given column's header is activated.
    ///
    /// Repeated activation cycles ascending → descending → natural; a
    /// different column always starts its own cycle ascending.
    pub fn toggle(&self, column: SortColumn) -> Self {
        if !self.is_active(column) {
            Self::ascending(column)
        } else if self.descending {
            Self::natural()
        } else {
            Self::descending(column)
        }
    }

    /// Serialise into the `sort` parameter value, `None` for natural order.
    ///
    /// Only known columns are emitted; an unknown inbound key is never
    /// reproduced in outbound links.
    pub fn query_value(&self) -> Option<String> {
        let column = self.active_column()?;
        Some(if self.descending {
            format!("{column}:desc")
        } else {
            column.to_string()
        })
    }
}

/// Produce a non-destructively ordered view of `people`.
///
/// The source slice is never reordered. With no active key the view keeps
/// input order; an unknown key reads no values, so the comparator sees every
/// pair as equal and the stable sort likewise keeps input order. Descending
/// is the explicit negation of the fixed ascending comparator.
pub fn sorted_view<'a>(people: &'a [Person], state: &SortState) -> Vec<&'a Person> {
    let mut view: Vec<&Person> = people.iter().collect();
    let Some(key) = state.key() else {
        return view;
    };

    view.sort_by(|a, b| {
        let ordering = match (a.sort_value(key), b.sort_value(key)) {
            (Some(left), Some(right)) => left.cmp(right),
            _ => Ordering::Equal,
        };
        if state.is_descending() {
            ordering.reverse()
        } else {
            ordering
        }
    });

    view
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn roster() -> Vec<Person> {
        vec![
            Person::new("Bob", "Designer", "b@x.com", "Admin"),
            Person::new("Amy", "Engineer", "a@x.com", "Member"),
            Person::new("Cal", "Analyst", "c@x.com", "Member"),
        ]
    }

    fn names<'a>(view: &[&'a Person]) -> Vec<&'a str> {
        view.iter().map(|p| p.name.as_str()).collect()
    }

    #[rstest]
    #[case(None, None, false)]
    #[case(Some("name"), Some(SortColumn::Name), false)]
    #[case(Some("name:desc"), Some(SortColumn::Name), true)]
    #[case(Some("role:desc"), Some(SortColumn::Role), true)]
    #[case(Some("name:asc"), Some(SortColumn::Name), false)]
    #[case(Some("name:desc:extra"), Some(SortColumn::Name), true)]
    #[case(Some("name:"), Some(SortColumn::Name), false)]
    fn parse_reads_field_and_direction(
        #[case] raw: Option<&str>,
        #[case] column: Option<SortColumn>,
        #[case] descending: bool,
    ) {
        let state = SortState::parse(raw);

        assert_eq!(state.active_column(), column);
        assert_eq!(state.is_descending(), descending);
    }

    #[rstest]
    #[case("bogusfield", "bogusfield")]
    #[case("", "")]
    #[case("Name", "Name")]
    fn parse_keeps_unknown_fields_verbatim(#[case] raw: &str, #[case] kept: &str) {
        let state = SortState::parse(Some(raw));

        assert_eq!(state.key(), Some(&SortKey::Unknown(kept.to_owned())));
        assert_eq!(state.active_column(), None);
    }

    #[rstest]
    fn parse_with_unknown_field_still_reads_direction() {
        let state = SortState::parse(Some("bogus:desc"));

        assert!(state.is_descending());
        assert_eq!(state.active_column(), None);
    }

    #[rstest]
    #[case(SortState::natural(), None)]
    #[case(SortState::ascending(SortColumn::Title), Some("title"))]
    #[case(SortState::descending(SortColumn::Email), Some("email:desc"))]
    fn query_value_serialises_state(#[case] state: SortState, #[case] expected: Option<&str>) {
        assert_eq!(state.query_value().as_deref(), expected);
    }

    #[rstest]
    fn toggle_cycles_through_three_states(
        #[values(SortColumn::Name, SortColumn::Title, SortColumn::Email, SortColumn::Role)]
        column: SortColumn,
    ) {
        let first = SortState::natural().toggle(column);
        let second = first.toggle(column);
        let third = second.toggle(column);

        assert_eq!(first, SortState::ascending(column));
        assert_eq!(second, SortState::descending(column));
        assert_eq!(third, SortState::natural());
    }

    #[rstest]
    #[case(SortState::ascending(SortColumn::Name))]
    #[case(SortState::descending(SortColumn::Name))]
    fn toggle_on_inactive_column_starts_ascending(#[case] current: SortState) {
        let next = current.toggle(SortColumn::Role);

        assert_eq!(next, SortState::ascending(SortColumn::Role));
    }

    #[rstest]
    fn toggle_ignores_unknown_active_key() {
        // "name" spelt wrongly is not the name column, so activating the
        // name header starts a fresh ascending cycle.
        let current = SortState::parse(Some("Name:desc"));

        let next = current.toggle(SortColumn::Name);

        assert_eq!(next, SortState::ascending(SortColumn::Name));
    }

    #[rstest]
    fn natural_order_preserves_input_order() {
        let people = roster();

        let view = sorted_view(&people, &SortState::natural());

        assert_eq!(names(&view), ["Bob", "Amy", "Cal"]);
    }

    #[rstest]
    fn ascending_sort_orders_by_field() {
        let people = roster();

        let view = sorted_view(&people, &SortState::ascending(SortColumn::Name));

        assert_eq!(names(&view), ["Amy", "Bob", "Cal"]);
    }

    #[rstest]
    fn descending_equals_reversed_ascending(
        #[values(SortColumn::Name, SortColumn::Title, SortColumn::Email, SortColumn::Role)]
        column: SortColumn,
    ) {
        let people = roster();

        let mut ascending = sorted_view(&people, &SortState::ascending(column));
        ascending.reverse();
        let descending = sorted_view(&people, &SortState::descending(column));

        assert_eq!(names(&ascending), names(&descending));
    }

    #[rstest]
    fn unknown_key_leaves_input_order() {
        let people = roster();

        let view = sorted_view(&people, &SortState::parse(Some("bogusfield")));

        assert_eq!(names(&view), ["Bob", "Amy", "Cal"]);
    }

    #[rstest]
    fn comparison_is_case_aware() {
        // Code-point order puts uppercase letters before lowercase ones.
        let people = vec![
            Person::new("amy", "Engineer", "a@x.com", "Member"),
            Person::new("Bob", "Designer", "b@x.com", "Admin"),
        ];

        let view = sorted_view(&people, &SortState::ascending(SortColumn::Name));

        assert_eq!(names(&view), ["Bob", "amy"]);
    }

    #[rstest]
    fn sorting_leaves_source_untouched() {
        let people = roster();

        let _view = sorted_view(&people, &SortState::ascending(SortColumn::Name));

        assert_eq!(
            people.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["Bob", "Amy", "Cal"]
        );
    }

    #[rstest]
    fn empty_roster_yields_empty_view() {
        let people: Vec<Person> = Vec::new();

        let view = sorted_view(&people, &SortState::ascending(SortColumn::Name));

        assert!(view.is_empty());
    }

    #[rstest]
    fn ties_keep_input_order() {
        let people = vec![
            Person::new("Bob", "Designer", "b@x.com", "Member"),
            Person::new("Amy", "Engineer", "a@x.com", "Member"),
        ];

        let view = sorted_view(&people, &SortState::ascending(SortColumn::Role));

        assert_eq!(names(&view), ["Bob", "Amy"]);
    }
}
