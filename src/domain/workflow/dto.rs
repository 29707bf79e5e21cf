use super::service::WorkflowOutcome;
use crate::domain::translation::{ProviderKind, ProviderSelection};
use crate::domain::tts::{AudioArtifact, LanguageEntry};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Language code (`fr`) or display name (`French`)
    pub target_language: String,
    #[serde(flatten)]
    pub selection: ProviderSelection,
}

/// Response for POST /api/translate and POST /api/translate/upload
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationOutcomeResponse {
    pub translated_text: String,
    pub target_language: LanguageEntry,
    pub provider: ProviderKind,
    pub audio: Option<AudioPayload>,
    pub synthesis_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AudioPayload {
    pub file_name: String,
    pub mime_type: String,
    pub data_base64: String,
}

impl From<AudioArtifact> for AudioPayload {
    fn from(audio: AudioArtifact) -> Self {
        Self {
            file_name: audio.file_name().to_string(),
            mime_type: audio.mime_type().to_string(),
            data_base64: STANDARD.encode(&audio.audio_data),
        }
    }
}

impl From<WorkflowOutcome> for TranslationOutcomeResponse {
    fn from(outcome: WorkflowOutcome) -> Self {
        Self {
            translated_text: outcome.translated_text,
            target_language: outcome.target_language.into(),
            provider: outcome.provider,
            audio: outcome.audio.map(AudioPayload::from),
            synthesis_error: outcome.synthesis_error,
        }
    }
}
