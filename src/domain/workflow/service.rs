use super::error::WorkflowError;
use crate::domain::extraction::ExtractionService;
use crate::domain::translation::{ProviderKind, TranslationProvider, TranslationServiceApi};
use crate::domain::tts::{AudioArtifact, LanguageCode, TtsServiceApi};
use std::sync::Arc;

/// Where the text to translate comes from
#[derive(Debug, Clone)]
pub enum SourceInput {
    Text(String),
    Document { file_name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone)]
pub struct WorkflowRequest {
    pub source: SourceInput,
    pub target_language: LanguageCode,
    pub provider: TranslationProvider,
}

/// Steps of a single run; a run only moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Init,
    HasSourceText,
    Translated,
    Synthesized,
    Presented,
}

/// What a finished run hands to the presentation layer. `audio` is `None`
/// when synthesis failed; the translation is still returned.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub translated_text: String,
    pub target_language: LanguageCode,
    pub provider: ProviderKind,
    pub audio: Option<AudioArtifact>,
    pub synthesis_error: Option<String>,
}

pub struct WorkflowService {
    extraction_service: ExtractionService,
    translation_service: Arc<dyn TranslationServiceApi>,
    tts_service: Arc<dyn TtsServiceApi>,
}

impl WorkflowService {
    pub fn new(
        extraction_service: ExtractionService,
        translation_service: Arc<dyn TranslationServiceApi>,
        tts_service: Arc<dyn TtsServiceApi>,
    ) -> Self {
        Self {
            extraction_service,
            translation_service,
            tts_service,
        }
    }

    /// Extract, translate and synthesize.
    ///
    /// Halts with an error when extraction fails, the provider is not
    /// configured, the source text is blank, or translation fails. A speech
    /// failure does not halt: the outcome carries the translation without audio.
    pub async fn run(&self, request: WorkflowRequest) -> Result<WorkflowOutcome, WorkflowError> {
        let WorkflowRequest {
            source,
            target_language,
            provider,
        } = request;
        log_stage(WorkflowStage::Init, target_language, provider.kind());

        let source_text = match source {
            SourceInput::Text(text) => text,
            SourceInput::Document { file_name, bytes } => {
                self.extraction_service.extract(&file_name, bytes).await?
            }
        };
        log_stage(WorkflowStage::HasSourceText, target_language, provider.kind());

        self.translation_service.ensure_configured(&provider)?;

        if source_text.trim().is_empty() {
            tracing::warn!("Workflow halted: no source text");
            return Err(WorkflowError::InputEmpty);
        }

        let translated_text = self
            .translation_service
            .translate(&source_text, target_language, &provider)
            .await?;
        log_stage(WorkflowStage::Translated, target_language, provider.kind());

        let (audio, synthesis_error) = match self
            .tts_service
            .synthesize(&translated_text, target_language)
            .await
        {
            Ok(audio) => {
                log_stage(WorkflowStage::Synthesized, target_language, provider.kind());
                (Some(audio), None)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    language = %target_language,
                    "Speech synthesis failed, returning translation without audio"
                );
                (None, Some(e.to_string()))
            }
        };

        log_stage(WorkflowStage::Presented, target_language, provider.kind());

        Ok(WorkflowOutcome {
            translated_text,
            target_language,
            provider: provider.kind(),
            audio,
            synthesis_error,
        })
    }
}

fn log_stage(stage: WorkflowStage, language: LanguageCode, provider: ProviderKind) {
    tracing::debug!(stage = ?stage, language = %language, provider = %provider, "Workflow stage");
}
