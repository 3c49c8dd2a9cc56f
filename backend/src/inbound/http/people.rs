//! People table handler.
//!
//! ```text
//! GET /api/v1/people            natural order
//! GET /api/v1/people?sort=name  ascending by name
//! GET /api/v1/people?sort=name:desc
//! ```
//!
//! The response carries the ordered rows together with one header
//! descriptor per sortable column. Each header's `href` encodes the next
//! state of the ascending → descending → natural toggle cycle, so clients
//! navigate rather than mutate.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::domain::{Person, SortColumn, SortState, sorted_view};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Path the table's header links navigate to.
const PEOPLE_PATH: &str = "/api/v1/people";

/// Query parameters accepted by the people table endpoint.
#[derive(Debug, Deserialize)]
pub struct PeopleQueryParams {
    /// Raw `sort` parameter value; any content is tolerated.
    pub sort: Option<String>,
}

/// Visual state of a column header's sort icon.
///
/// Purely a function of whether the column is active and of the current
/// direction; clients hide the icon when inactive and rotate it when
/// descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    /// Column is not the active sort field.
    Inactive,
    /// Column is active, ascending.
    Ascending,
    /// Column is active, descending.
    Descending,
}

/// One column header: caption, navigation target, and indicator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeaderBody {
    /// Machine field name of the column.
    pub field: SortColumn,
    /// Human-readable caption.
    pub label: String,
    /// Navigation target encoding the next toggle state.
    pub href: String,
    /// Sort icon state.
    pub indicator: SortIndicator,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRowBody {
    /// Stable row identity: the record's email.
    pub key: String,
    /// Full display name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Email address.
    pub email: String,
    /// Job role.
    pub role: String,
}

impl From<&Person> for PersonRowBody {
    fn from(person: &Person) -> Self {
        Self {
            key: person.email.clone(),
            name: person.name.clone(),
            title: person.title.clone(),
            email: person.email.clone(),
            role: person.role.clone(),
        }
    }
}

/// The rendered people table.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeopleTableBody {
    /// Header descriptors, one per sortable column, in display order.
    pub columns: Vec<ColumnHeaderBody>,
    /// Ordered rows.
    pub rows: Vec<PersonRowBody>,
}

/// Human-readable caption for a column.
const fn column_label(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Name => "Name",
        SortColumn::Title => "Title",
        SortColumn::Email => "Email",
        SortColumn::Role => "Role",
    }
}

/// Serialise a target state into the table path with its query string.
fn table_href(state: &SortState) -> String {
    match state.query_value() {
        Some(value) => {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("sort", &value)
                .finish();
            format!("{PEOPLE_PATH}?{query}")
        }
        None => PEOPLE_PATH.to_owned(),
    }
}

fn indicator_for(current: &SortState, column: SortColumn) -> SortIndicator {
    if !current.is_active(column) {
        SortIndicator::Inactive
    } else if current.is_descending() {
        SortIndicator::Descending
    } else {
        SortIndicator::Ascending
    }
}

/// Build one column header from the current sort state.
fn build_column_header(current: &SortState, column: SortColumn) -> ColumnHeaderBody {
    let target = current.toggle(column);

    ColumnHeaderBody {
        field: column,
        label: column_label(column).to_owned(),
        href: table_href(&target),
        indicator: indicator_for(current, column),
    }
}

/// Render the people table.
///
/// The `sort` query parameter selects the ordering: `<field>` ascending,
/// `<field>:desc` descending, absent for natural order. Unrecognised values
/// are tolerated and leave the roster order untouched.
#[utoipa::path(
    get,
    path = "/api/v1/people",
    params(
        ("sort" = Option<String>, Query, description = "Sort field, optionally suffixed with `:desc`")
    ),
    responses(
        (status = 200, description = "People table", body = PeopleTableBody),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(
    state: web::Data<HttpState>,
    query: web::Query<PeopleQueryParams>,
) -> ApiResult<web::Json<PeopleTableBody>> {
    let sort_state = SortState::parse(query.sort.as_deref());
    debug!(sort = ?query.sort, "rendering people table");

    let people = state.directory.list_people().await?;
    let view = sorted_view(&people, &sort_state);

    let columns = SortColumn::ALL
        .into_iter()
        .map(|column| build_column_header(&sort_state, column))
        .collect();
    let rows = view.into_iter().map(PersonRowBody::from).collect();

    Ok(web::Json(PeopleTableBody { columns, rows }))
}
