//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, Swagger UI
//! serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered within one `routes!` call. The OpenAPI
/// specification is available at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `POST /api/auth/login`, `POST /api/auth/register`, `GET /api/auth/logout`,
///   `GET /api/auth/user`
/// - `GET /api/users`, `PUT /api/users/{uid}`, `GET /api/users/{uid}/exists`,
///   `PUT /api/users/{uid}/password`, `POST /api/users/{uid}/password/reset`,
///   `PUT /api/users/{uid}/group/{group_id}`, `GET /api/groups`
/// - `GET /api/bookings/user`, `GET|POST /api/bookings`, `PUT|DELETE /api/bookings/{booking_id}`
/// - `GET|POST /api/projects`
/// - `GET /api/statistics/bookings`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Timebook", description = "Timebook API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User administration API routes"),
        (name = controller::booking::BOOKING_TAG, description = "Booking API routes"),
        (name = controller::project::PROJECT_TAG, description = "Project API routes"),
        (name = controller::statistic::STATISTIC_TAG, description = "Statistics API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_auth_data))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::update_user))
        .routes(routes!(controller::user::user_exists))
        .routes(routes!(controller::user::change_password))
        .routes(routes!(controller::user::reset_password))
        .routes(routes!(controller::user::change_group))
        .routes(routes!(controller::user::get_groups))
        .routes(routes!(controller::booking::get_user_bookings))
        .routes(routes!(
            controller::booking::get_bookings,
            controller::booking::create_booking
        ))
        .routes(routes!(
            controller::booking::update_booking,
            controller::booking::delete_booking
        ))
        .routes(routes!(
            controller::project::get_projects,
            controller::project::create_project
        ))
        .routes(routes!(controller::statistic::get_booking_statistics))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
