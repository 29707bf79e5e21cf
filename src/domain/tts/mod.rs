pub mod dto;
pub mod error;
pub mod language;
pub mod service;

pub use dto::SpeechRequest;
pub use error::TtsServiceError;
pub use language::{supported_languages, LanguageCode, LanguageEntry};
pub use service::{AudioArtifact, TtsService, TtsServiceApi, AUDIO_FILE_NAME, AUDIO_MIME_TYPE};
