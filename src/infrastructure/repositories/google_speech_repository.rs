use super::speech_repository::SpeechRepository;
use crate::infrastructure::google;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

const TTS_API_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Fixed synthesis configuration. None of these are caller-configurable.
const LANGUAGE_CODE: &str = "en-US";
const VOICE_NAME: &str = "en-US-Neural2-C";
const AUDIO_ENCODING: &str = "MP3";

/// Google Cloud TTS implementation of the speech repository
pub struct GoogleSpeechRepository {
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

impl GoogleSpeechRepository {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn call_tts(&self, text: &str, token: &str) -> Result<Vec<u8>, String> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: LANGUAGE_CODE,
                name: VOICE_NAME,
            },
            audio_config: AudioConfig {
                audio_encoding: AUDIO_ENCODING,
            },
        };

        let response = self
            .client
            .post(TTS_API_URL)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let body: SynthesizeResponse = response.json().await.map_err(|e| e.to_string())?;

        base64::engine::general_purpose::STANDARD
            .decode(body.audio_content)
            .map_err(|e| format!("invalid audio payload: {}", e))
    }
}

#[async_trait]
impl SpeechRepository for GoogleSpeechRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String> {
        // Same gate as the script repository, re-validated per call.
        let token = google::access_token().await?;

        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = VOICE_NAME,
            language = LANGUAGE_CODE,
            text_length = text.len(),
            "Calling Cloud TTS synthesize"
        );

        let audio_data = self.call_tts(text, &token).await.map_err(|e| {
            tracing::error!(
                error = %e,
                voice = VOICE_NAME,
                text_length = text.len(),
                "Cloud TTS call failed"
            );
            format!("Cloud TTS call failed: {}", e)
        })?;

        tracing::info!(
            voice = VOICE_NAME,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            "Cloud TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
