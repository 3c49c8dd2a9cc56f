//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the people table endpoint, the health probes, and the
//! schemas their bodies reference. The generated document backs Swagger UI
//! in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, SortColumn};
use crate::inbound::http::people::{
    ColumnHeaderBody, PeopleTableBody, PersonRowBody, SortIndicator,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "People directory API",
        description = "HTTP interface rendering a sortable people table.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::people::list_people,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PeopleTableBody,
        ColumnHeaderBody,
        PersonRowBody,
        SortIndicator,
        SortColumn,
        Error,
        ErrorCode
    )),
    tags(
        (name = "people", description = "The sortable people table"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_table_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let table = schemas.get("PeopleTableBody").expect("table schema");

        assert_object_schema_has_field(table, "columns");
        assert_object_schema_has_field(table, "rows");
    }

    #[test]
    fn openapi_header_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let header = schemas.get("ColumnHeaderBody").expect("header schema");

        assert_object_schema_has_field(header, "field");
        assert_object_schema_has_field(header, "label");
        assert_object_schema_has_field(header, "href");
        assert_object_schema_has_field(header, "indicator");
    }

    #[test]
    fn openapi_document_lists_the_table_endpoint() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/v1/people"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
        assert!(doc.paths.paths.contains_key("/health/live"));
    }
}
