use super::dto::PodcastEpisode;
use super::error::PodcastServiceError;
use crate::infrastructure::repositories::{ScriptRepository, SpeechRepository};
use crate::infrastructure::storage::AudioStorage;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Instructional preamble prepended to every prompt. The insight lines
/// follow after a blank line.
const PROMPT_PREAMBLE: &str = "You are a friendly podcast host. Turn the following insights into an engaging spoken podcast script that feels natural and conversational, lasting around 1-2 minutes. Do not include bullet points — make it sound like a human talking.";

pub struct PodcastService {
    script_repo: Arc<dyn ScriptRepository>,
    speech_repo: Arc<dyn SpeechRepository>,
    storage: Arc<AudioStorage>,
}

impl PodcastService {
    pub fn new(
        script_repo: Arc<dyn ScriptRepository>,
        speech_repo: Arc<dyn SpeechRepository>,
        storage: Arc<AudioStorage>,
    ) -> Self {
        Self {
            script_repo,
            speech_repo,
            storage,
        }
    }
}

#[async_trait]
pub trait PodcastServiceApi: Send + Sync {
    /// Produce an episode from an insights mapping.
    ///
    /// This operation:
    /// - Builds the host prompt from the list-valued insights
    /// - Calls the script repository once and strips markdown fences
    /// - Calls the speech repository once and writes the MP3 to storage
    ///
    /// Synthesis-stage failures keep the generated script in the error.
    async fn create_episode(
        &self,
        insights: &Map<String, Value>,
    ) -> Result<PodcastEpisode, PodcastServiceError>;
}

#[async_trait]
impl PodcastServiceApi for PodcastService {
    async fn create_episode(
        &self,
        insights: &Map<String, Value>,
    ) -> Result<PodcastEpisode, PodcastServiceError> {
        // 1. Build the prompt from list-valued insight entries
        let prompt = build_prompt(insights);

        tracing::info!(
            categories = insights.len(),
            prompt_length = prompt.len(),
            "Generating podcast script"
        );

        // 2. Generate the script; stop here on failure, no audio attempted
        let raw = self
            .script_repo
            .generate(&prompt)
            .await
            .map_err(PodcastServiceError::ScriptGeneration)?;

        // 3. Trim and strip markdown code fences from the model output
        let script = strip_code_fences(raw.trim());

        tracing::info!(script_length = script.len(), "Script generated");

        if script.is_empty() {
            // Deliberately not rejected: an empty script synthesizes to
            // near-silent audio, matching upstream behavior.
            tracing::warn!("Generation produced an empty script; synthesizing anyway");
        }

        // 4. Synthesize and persist under a random unique filename
        let filename = audio_filename();

        let audio_data = self
            .speech_repo
            .synthesize(&script)
            .await
            .map_err(|message| PodcastServiceError::Synthesis {
                message,
                script: script.clone(),
            })?;

        let audio_url = self
            .storage
            .store(&filename, &audio_data)
            .await
            .map_err(|e| PodcastServiceError::Synthesis {
                message: e.to_string(),
                script: script.clone(),
            })?;

        tracing::info!(
            audio_url = %audio_url,
            audio_size_bytes = audio_data.len(),
            "Episode audio written"
        );

        Ok(PodcastEpisode { script, audio_url })
    }
}

/// Assemble the generation prompt: the fixed preamble, a blank line, then one
/// `category: item, item` line per list-valued entry. Entries whose value is
/// not a list are dropped silently; non-string items inside a list are
/// skipped.
fn build_prompt(insights: &Map<String, Value>) -> String {
    let body = insights
        .iter()
        .filter_map(|(category, value)| {
            let items = value.as_array()?;
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{}: {}", category, joined))
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}", PROMPT_PREAMBLE, body)
}

/// Remove leading/trailing triple-backtick fences (the leading one may carry
/// a language tag) left by models that wrap their answer in a code block.
/// A no-op on unfenced text.
fn strip_code_fences(text: &str) -> String {
    let fence = regex::Regex::new(r"(?m)^```(?:\w+)?\s*|\s*```$").unwrap();
    fence.replace_all(text, "").into_owned()
}

/// `podcast_<32 hex chars>.mp3`, unique per call.
fn audio_filename() -> String {
    format!("podcast_{}.mp3", Uuid::new_v4().simple())
}
