use super::translation_repository::TranslationRepository;
use crate::domain::translation::build_translation_prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Local Ollama `/api/generate` implementation of the translation repository
pub struct OllamaTranslationRepository {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaTranslationRepository {
    pub fn new(http: reqwest::Client, url: String, model: String) -> Self {
        Self { http, url, model }
    }
}

#[async_trait]
impl TranslationRepository for OllamaTranslationRepository {
    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String> {
        let prompt = build_translation_prompt(text, target_language);
        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        tracing::info!(
            url = %self.url,
            model = %self.model,
            target_language = target_language,
            "Calling Ollama generate"
        );

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Ollama request failed: {}", e))?
            .error_for_status()
            .map_err(|e| format!("Ollama returned an error status: {}", e))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| format!("Malformed Ollama response: {}", e))?;

        body.response
            .map(|t| t.trim().to_string())
            .ok_or_else(|| "Ollama response has no 'response' field".to_string())
    }
}
