//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every API endpoint together with its OpenAPI specification and serves Swagger UI
//! at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/airplanes` - List every airplane
/// - `POST /api/airplanes` - Create an airplane
/// - `GET /api/airplanes/new` - Blank creation form
/// - `GET /api/airplanes/{id}` - Get a single airplane
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Hangar", description = "Hangar API"), tags(
        (name = controller::airplane::AIRPLANE_TAG, description = "Airplane API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::airplane::list_airplanes,
            controller::airplane::create_airplane
        ))
        .routes(routes!(controller::airplane::new_airplane))
        .routes(routes!(controller::airplane::show_airplane))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
