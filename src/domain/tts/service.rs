use super::error::TtsServiceError;
use super::language::LanguageCode;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Fixed name offered when the audio is downloaded
pub const AUDIO_FILE_NAME: &str = "translated_speech.mp3";
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// Synthesized speech, held in memory only
#[derive(Debug, Clone, PartialEq)]
pub struct AudioArtifact {
    pub audio_data: Vec<u8>,
    pub language: LanguageCode,
}

impl AudioArtifact {
    pub fn file_name(&self) -> &'static str {
        AUDIO_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        AUDIO_MIME_TYPE
    }
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech in the given language
    ///
    /// Returns the whole MP3 stream buffered in memory. Fails when the text is
    /// blank, the backend rejects the language, or the backend is unreachable.
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioArtifact, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<AudioArtifact, TtsServiceError> {
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid(
                "Text to synthesize cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            language = %language,
            text_length = text.chars().count(),
            "TTS synthesis request"
        );

        let audio_data = self
            .tts_repo
            .synthesize(text, language)
            .await
            .map_err(TtsServiceError::Dependency)?;

        if audio_data.is_empty() {
            return Err(TtsServiceError::Dependency(
                "Speech backend returned no audio".to_string(),
            ));
        }

        Ok(AudioArtifact {
            audio_data,
            language,
        })
    }
}
