use super::error::TranslationServiceError;
use super::provider::{ProviderKind, TranslationProvider};
use crate::domain::tts::LanguageCode;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{
    GeminiTranslationRepository, LlamaCppTranslationRepository, OllamaTranslationRepository,
    TranslationRepository,
};
use async_trait::async_trait;

/// Connection settings for the hosted Gemini backend
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl GeminiSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        }
    }
}

pub struct TranslationService {
    http: reqwest::Client,
    gemini: GeminiSettings,
}

impl TranslationService {
    pub fn new(http: reqwest::Client, gemini: GeminiSettings) -> Self {
        Self { http, gemini }
    }

    /// Build the repository for one request. Local backends are built from the
    /// request's parameters; Gemini needs the configured credential.
    fn repository_for(
        &self,
        provider: &TranslationProvider,
    ) -> Result<Box<dyn TranslationRepository>, TranslationServiceError> {
        match provider {
            TranslationProvider::Gemini => {
                let api_key = self.gemini_api_key()?;
                Ok(Box::new(GeminiTranslationRepository::new(
                    self.http.clone(),
                    api_key.to_string(),
                    self.gemini.model.clone(),
                    self.gemini.api_base.clone(),
                )))
            }
            TranslationProvider::Ollama { model, url } => Ok(Box::new(
                OllamaTranslationRepository::new(self.http.clone(), url.clone(), model.clone()),
            )),
            TranslationProvider::LlamaCpp { url } => Ok(Box::new(
                LlamaCppTranslationRepository::new(self.http.clone(), url.clone()),
            )),
        }
    }

    fn gemini_api_key(&self) -> Result<&str, TranslationServiceError> {
        self.gemini
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TranslationServiceError::ConfigurationMissing(
                    "GEMINI_API_KEY is not configured".to_string(),
                )
            })
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Check that the provider can be used at all, without any network call
    fn ensure_configured(&self, provider: &TranslationProvider)
        -> Result<(), TranslationServiceError>;

    /// Whether a provider kind is usable with the current configuration
    fn is_configured(&self, kind: ProviderKind) -> bool;

    /// Translate `text` into `target`
    ///
    /// Returns the trimmed translation. Any backend failure or an empty
    /// translation is an error; there is no partial result.
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
        provider: &TranslationProvider,
    ) -> Result<String, TranslationServiceError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    fn ensure_configured(
        &self,
        provider: &TranslationProvider,
    ) -> Result<(), TranslationServiceError> {
        match provider {
            TranslationProvider::Gemini => self.gemini_api_key().map(|_| ()),
            TranslationProvider::Ollama { .. } | TranslationProvider::LlamaCpp { .. } => Ok(()),
        }
    }

    fn is_configured(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Gemini => self.gemini_api_key().is_ok(),
            ProviderKind::Ollama | ProviderKind::LlamaCpp => true,
        }
    }

    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
        provider: &TranslationProvider,
    ) -> Result<String, TranslationServiceError> {
        let repository = self.repository_for(provider)?;
        let start_time = std::time::Instant::now();

        let translated = repository
            .translate(text, target.display_name())
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = repository.provider_name(),
                    target_language = %target,
                    error = %e,
                    "Translation failed"
                );
                TranslationServiceError::Dependency(e)
            })?;

        tracing::info!(
            provider = repository.provider_name(),
            target_language = %target,
            source_length = text.chars().count(),
            translated_length = translated.chars().count(),
            latency_ms = start_time.elapsed().as_millis(),
            "Translation completed"
        );

        if translated.is_empty() {
            return Err(TranslationServiceError::Empty);
        }

        Ok(translated)
    }
}
