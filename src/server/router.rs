//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/applications` - List every job application
/// - `POST /api/applications` - Create a job application
/// - `DELETE /api/applications` - Delete every job application
/// - `GET /api/applications/{id}` - Get a single job application
/// - `PUT /api/applications/{id}` - Update the supplied fields of a job application
/// - `DELETE /api/applications/{id}` - Delete a single job application
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Jobtrack", description = "Job application tracker API"), tags(
        (name = controller::application::APPLICATION_TAG, description = "Job application API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::application::list_applications,
            controller::application::create_application,
            controller::application::delete_all_applications
        ))
        .routes(routes!(
            controller::application::get_application,
            controller::application::update_application,
            controller::application::delete_application
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
