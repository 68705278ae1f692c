use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insightcast_backend::controllers::podcast::PodcastController;
use insightcast_backend::domain::podcast::PodcastService;
use insightcast_backend::infrastructure::config::{Config, LogFormat};
use insightcast_backend::infrastructure::google;
use insightcast_backend::infrastructure::http::start_http_server;
use insightcast_backend::infrastructure::repositories::{
    GeminiScriptRepository, GoogleSpeechRepository,
};
use insightcast_backend::infrastructure::storage::AudioStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Insightcast Backend on {}:{}",
        config.host,
        config.port
    );

    // Credentials are re-validated on every request; this is just an early
    // heads-up in the logs.
    if google::check_credentials().is_err() {
        tracing::warn!(
            "GOOGLE_APPLICATION_CREDENTIALS is unset or names a missing file. \
             Script generation and synthesis will fail until it is configured"
        );
    }

    tracing::info!(
        model = %config.gemini_model,
        audio_dir = %config.audio_dir().display(),
        "Google pipeline configuration loaded"
    );

    let http_client = reqwest::Client::new();
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject the shared HTTP client)
    let script_repo = Arc::new(GeminiScriptRepository::new(
        http_client.clone(),
        config.gemini_model.clone(),
    ));
    let speech_repo = Arc::new(GoogleSpeechRepository::new(http_client));
    let storage = Arc::new(AudioStorage::new(config.audio_dir(), "/static/audio"));

    // 2. Instantiate services (inject repositories)
    let podcast_service = Arc::new(PodcastService::new(script_repo, speech_repo, storage));

    // 3. Instantiate controllers (inject services)
    let podcast_controller = Arc::new(PodcastController::new(podcast_service));

    // Start HTTP server with all routes
    start_http_server(config, podcast_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "insightcast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "insightcast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
