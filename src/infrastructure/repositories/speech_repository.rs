use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (Google Cloud TTS, Polly, etc.)
///
/// Implementations are responsible for:
/// - Validating provider credentials before any network call
/// - Provider-specific voice and encoding configuration
/// - Collapsing provider failures into a single message string
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize the given text to audio bytes (MP3).
    ///
    /// The text is sent as-is; length limits are the provider's to enforce.
    ///
    /// # Errors
    /// Returns an error message if credentials are missing or synthesis
    /// fails for any reason.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String>;
}
