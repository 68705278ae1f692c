use async_trait::async_trait;

/// Repository for script text generation.
/// Abstracts the underlying text-generation provider (Gemini, OpenAI, etc.)
///
/// Implementations are responsible for:
/// - Validating provider credentials before any network call
/// - Provider-specific request/response mapping
/// - Collapsing provider failures into a single message string
#[async_trait]
pub trait ScriptRepository: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// Returns the provider's raw output, untrimmed. Post-processing
    /// (whitespace, markdown fences) is the caller's concern.
    ///
    /// # Errors
    /// Returns an error message if credentials are missing or the provider
    /// call fails for any reason; no distinction is made between causes.
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
