use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request for POST /podcast
///
/// `insights` maps category names to arbitrary JSON; only list-shaped values
/// contribute to the generated script. The map keeps the caller's key order.
#[derive(Debug, Deserialize)]
pub struct PodcastRequest {
    pub insights: Map<String, Value>,
}

/// Response for POST /podcast. Always returned with a 200 status; callers
/// detect failure by the presence of the `error` field.
#[derive(Debug, Serialize)]
pub struct PodcastResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PodcastResponse {
    pub fn success(episode: PodcastEpisode) -> Self {
        Self {
            script: Some(episode.script),
            audio_url: Some(episode.audio_url),
            error: None,
        }
    }

    /// Script generation failed; nothing to return but the message.
    pub fn generation_failed(error: String) -> Self {
        Self {
            script: None,
            audio_url: None,
            error: Some(error),
        }
    }

    /// Synthesis failed after generation succeeded; the script is preserved.
    pub fn synthesis_failed(error: String, script: String) -> Self {
        Self {
            script: Some(script),
            audio_url: None,
            error: Some(error),
        }
    }
}

/// A fully produced episode: the script text and the public URL of its audio.
#[derive(Debug, Clone)]
pub struct PodcastEpisode {
    pub script: String,
    pub audio_url: String,
}
