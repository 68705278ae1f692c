use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::podcast::{
    PodcastRequest, PodcastResponse, PodcastService, PodcastServiceApi, PodcastServiceError,
};

pub struct PodcastController {
    podcast_service: Arc<PodcastService>,
}

impl PodcastController {
    pub fn new(podcast_service: Arc<PodcastService>) -> Self {
        Self { podcast_service }
    }

    /// POST /podcast - Turn an insights mapping into a spoken episode
    ///
    /// Always answers 200 with one of three envelopes: `{script, audio_url}`
    /// on success, `{error}` when generation fails, `{error, script}` when
    /// synthesis fails after a script was produced. Malformed bodies are
    /// rejected by the Json extractor before reaching this handler.
    pub async fn generate(
        State(controller): State<Arc<PodcastController>>,
        Json(request): Json<PodcastRequest>,
    ) -> Json<PodcastResponse> {
        match controller
            .podcast_service
            .create_episode(&request.insights)
            .await
        {
            Ok(episode) => Json(PodcastResponse::success(episode)),
            Err(PodcastServiceError::ScriptGeneration(message)) => {
                tracing::error!(error = %message, "Script generation failed");
                Json(PodcastResponse::generation_failed(message))
            }
            Err(PodcastServiceError::Synthesis { message, script }) => {
                tracing::error!(error = %message, "Speech synthesis failed");
                Json(PodcastResponse::synthesis_failed(
                    format!("TTS failed: {}", message),
                    script,
                ))
            }
        }
    }
}
