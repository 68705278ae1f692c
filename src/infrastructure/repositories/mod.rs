pub mod gemini_script_repository;
pub mod google_speech_repository;
pub mod script_repository;
pub mod speech_repository;

pub use gemini_script_repository::GeminiScriptRepository;
pub use google_speech_repository::GoogleSpeechRepository;
pub use script_repository::ScriptRepository;
pub use speech_repository::SpeechRepository;
