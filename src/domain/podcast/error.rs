#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    /// Script generation failed; the message carries the underlying cause.
    #[error("{0}")]
    ScriptGeneration(String),

    /// Synthesis (or writing its output) failed after a script was produced.
    /// The script is kept so the caller can still return it.
    #[error("{message}")]
    Synthesis { message: String, script: String },
}
