pub mod request_id;

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, podcast::PodcastController};
use crate::infrastructure::config::Config;
use request_id::request_id_middleware;

/// Build the application router.
///
/// Also mounts the static directory at /static so the audio URLs returned by
/// the podcast endpoint resolve against this server. The browser frontend is
/// served from another origin, hence the permissive CORS layer.
pub fn build_router(config: Arc<Config>, podcast_controller: Arc<PodcastController>) -> Router {
    let podcast_routes = Router::new()
        .route("/podcast", post(PodcastController::generate))
        .with_state(podcast_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(podcast_routes)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    podcast_controller: Arc<PodcastController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), podcast_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
