use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::translation::{
    ProviderDefaults, ProviderDescriptor, ProviderKind, TranslationServiceApi,
};
use crate::domain::tts::{supported_languages, LanguageEntry};

pub struct CatalogController {
    translation_service: Arc<dyn TranslationServiceApi>,
    provider_defaults: ProviderDefaults,
    gemini_model: String,
}

impl CatalogController {
    pub fn new(
        translation_service: Arc<dyn TranslationServiceApi>,
        provider_defaults: ProviderDefaults,
        gemini_model: String,
    ) -> Self {
        Self {
            translation_service,
            provider_defaults,
            gemini_model,
        }
    }

    /// GET /api/languages - Supported target languages in display order
    pub async fn list_languages() -> Json<Vec<LanguageEntry>> {
        Json(supported_languages())
    }

    /// GET /api/providers - Translation backends and their defaults
    pub async fn list_providers(
        State(controller): State<Arc<CatalogController>>,
    ) -> Json<Vec<ProviderDescriptor>> {
        let providers = ProviderKind::ALL
            .iter()
            .map(|&kind| controller.describe(kind))
            .collect();
        Json(providers)
    }

    fn describe(&self, kind: ProviderKind) -> ProviderDescriptor {
        let defaults = &self.provider_defaults;
        let (default_model, default_url) = match kind {
            ProviderKind::Gemini => (Some(self.gemini_model.clone()), None),
            ProviderKind::Ollama => (
                Some(defaults.ollama_model.clone()),
                Some(defaults.ollama_url.clone()),
            ),
            ProviderKind::LlamaCpp => (None, Some(defaults.llama_cpp_url.clone())),
        };

        ProviderDescriptor {
            id: kind,
            name: kind.display_name().to_string(),
            configured: self.translation_service.is_configured(kind),
            default_model,
            default_url,
        }
    }
}
