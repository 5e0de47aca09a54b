mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use crate::server::{
    config::Config,
    error::{expose_error_details, AppError},
    router, seed,
    service::{media::cloudinary::CloudinaryStore, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing();
    expose_error_details(!config.is_production());

    let db = startup::connect_to_database(&config).await?;

    seed::ensure_admin(&db, config.admin.as_ref()).await?;
    if config.seed_database {
        seed::seed_demo_data(&db).await?;
    }

    let http_client = startup::setup_reqwest_client()?;
    let media = CloudinaryStore::new(http_client, config.cloudinary.clone());

    let state = AppState::new(db, TokenService::new(&config.jwt_secret), Arc::new(media));

    let app = router::router(&config.static_dir)
        .layer(startup::cors_layer(&config))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running in {} mode on port {}", config.app_env, config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
