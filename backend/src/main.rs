//! Backend entry-point: wires the people table, health probes, and OpenAPI
//! docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::RequestIdentity;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::{DirectoryQuery, FixtureDirectoryQuery};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::people::list_people;
use backend::inbound::http::state::HttpState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let directory = build_directory()?;
    let http_state = web::Data::new(HttpState::new(directory));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    // Clone for the server factory so the readiness flag stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(("0.0.0.0", 8080))?;

    info!(port = 8080, "people directory listening");
    health_state.mark_ready();
    server.run().await
}

/// Pick the roster source: the generated example roster when enabled, the
/// built-in fixture otherwise.
#[cfg(feature = "example-data")]
fn build_directory() -> std::io::Result<Arc<dyn DirectoryQuery>> {
    use std::ffi::OsString;

    use backend::example_data::{ExampleDataSettings, seeded_directory};
    use ortho_config::OrthoConfig;

    // Settings come from EXAMPLE_DATA_* environment variables; CLI arguments
    // are not part of this service's surface.
    let settings = ExampleDataSettings::load_from_iter([OsString::from("backend")])
        .map_err(std::io::Error::other)?;
    if settings.enabled {
        info!(
            seed = settings.seed(),
            count = settings.count(),
            "serving generated example roster"
        );
        let directory = seeded_directory(&settings).map_err(std::io::Error::other)?;
        return Ok(Arc::new(directory));
    }

    Ok(Arc::new(FixtureDirectoryQuery))
}

/// Pick the roster source: always the built-in fixture without the
/// `example-data` feature.
#[cfg(not(feature = "example-data"))]
fn build_directory() -> std::io::Result<Arc<dyn DirectoryQuery>> {
    Ok(Arc::new(FixtureDirectoryQuery))
}

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").service(list_people);

    #[allow(unused_mut, reason = "reassigned in debug builds only")]
    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(RequestIdentity)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
