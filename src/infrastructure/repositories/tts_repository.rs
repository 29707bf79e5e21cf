use crate::domain::tts::LanguageCode;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech backend.
///
/// Implementations are responsible for:
/// - Handling backend-specific text length limitations
/// - Splitting text into batches if needed
/// - Merging audio chunks into a single MP3 stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns error if the backend rejects the language code or is unreachable
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String>;
}
