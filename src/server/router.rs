//! Route table and OpenAPI document.
//!
//! Handlers are registered through `OpenApiRouter` so every route also lands in the
//! generated document served at `/api/openapi.json`.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, game, health, order, upload, user},
    model::media::{UploadPreset, MAX_MULTIPLE_FILES},
    state::AppState,
};

/// Largest multipart body the upload routes accept: a full batch plus form overhead.
const UPLOAD_BODY_LIMIT: usize =
    MAX_MULTIPLE_FILES * UploadPreset::GAME_IMAGE.max_bytes as usize + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GameStore API",
        description = "Game catalog, orders, accounts, and image upload"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, and profile"),
        (name = "game", description = "Game catalog"),
        (name = "order", description = "Orders and order status"),
        (name = "upload", description = "Image upload to the media host"),
        (name = "user", description = "Account administration"),
        (name = "health", description = "Service status")
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// # Arguments
/// - `static_dir` - Directory served under `/static`
///
/// # Returns
/// - `Router<AppState>` - All API routes, the Swagger UI, and static files, awaiting state
pub fn router(static_dir: &str) -> Router<AppState> {
    let upload_routes = OpenApiRouter::new()
        .routes(routes!(upload::upload_game_image))
        .routes(routes!(upload::upload_profile_image))
        .routes(routes!(upload::upload_multiple_images))
        .routes(routes!(upload::test_connection))
        .routes(routes!(upload::delete_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::banner))
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::get_profile, auth::update_profile))
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::search_games))
        .routes(routes!(game::get_game, game::update_game, game::delete_game))
        .routes(routes!(order::create_order))
        .routes(routes!(order::get_my_orders))
        .routes(routes!(order::get_all_orders))
        .routes(routes!(order::get_order, order::cancel_order))
        .routes(routes!(order::update_order_status))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user))
        .routes(routes!(user::update_user_role))
        .merge(upload_routes)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
