//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every page and form endpoint is registered through utoipa so the generated OpenAPI
//! document lists the whole HTTP surface. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Redirect to the login page
/// - `GET /login`, `POST /login` - Login form & authentication
/// - `GET /register`, `POST /register` - Registration form & account creation
/// - `GET /logout` - Flush the session
/// - `GET /dashboard` - Summary and run logging form
/// - `POST /log-run` - Store a run, JSON response
/// - `GET /leaderboard` - Top users by lifetime high runes
/// - `GET /my-stats` - Per user chart, rune tally & recent runs
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// The session layer is not part of the returned router, see
/// [`startup::session_layer`](crate::server::startup::session_layer).
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Rune Ledger", description = "Rune Ledger HTTP API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login & logout"),
        (name = controller::run::RUN_TAG, description = "Run logging"),
        (name = controller::dashboard::PAGE_TAG, description = "Rendered pages for logged in users"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::index))
        .routes(routes!(controller::auth::login_page, controller::auth::login))
        .routes(routes!(
            controller::auth::register_page,
            controller::auth::register
        ))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::dashboard::dashboard))
        .routes(routes!(controller::run::log_run))
        .routes(routes!(controller::stats::leaderboard))
        .routes(routes!(controller::stats::my_stats))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
