//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are
/// collected into a unified OpenAPI document served at `/api/docs/openapi.json`,
/// with interactive Swagger UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `POST /api/auth/signup` - Register a new account
/// - `POST /api/auth/login` - Sign in with email and password
/// - `POST /api/auth/logout` - Clear the current session
/// - `GET /api/auth/user` - Get the signed-in account
/// - `GET /api/me` - Get own profile, measurements, and children
/// - `PUT /api/me/name` - Update own display name
/// - `PUT /api/me/measurements` - Save own measurements
/// - `POST /api/children` - Add a child record
/// - `PUT /api/children/{child_id}/measurements` - Save a child's measurements
/// - `POST /api/family` - Create a family group
/// - `GET /api/family` - Get the family roster and member detail
/// - `POST /api/family/invites` - Issue an invite token
/// - `POST /api/family/invites/accept` - Redeem an invite token
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "SizeVault", description = "SizeVault API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::me::ME_TAG, description = "Own profile API routes"),
        (name = controller::child::CHILD_TAG, description = "Child record API routes"),
        (name = controller::family::FAMILY_TAG, description = "Family group API routes"),
        (name = controller::invite::INVITE_TAG, description = "Family invite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::user))
        .routes(routes!(controller::me::get_me))
        .routes(routes!(controller::me::update_name))
        .routes(routes!(controller::me::save_measurements))
        .routes(routes!(controller::child::create_child))
        .routes(routes!(controller::child::save_child_measurements))
        .routes(routes!(
            controller::family::create_family,
            controller::family::family_overview
        ))
        .routes(routes!(controller::invite::create_invite))
        .routes(routes!(controller::invite::accept_invite))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
