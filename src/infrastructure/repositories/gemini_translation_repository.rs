use super::translation_repository::TranslationRepository;
use crate::domain::translation::build_translation_prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, like the SDK's `response.text`
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// Google Gemini implementation of the translation repository
pub struct GeminiTranslationRepository {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiTranslationRepository {
    /// The credential is required; there is no way to build this repository without one.
    pub fn new(http: reqwest::Client, api_key: String, model: String, api_base: String) -> Self {
        Self {
            http,
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TranslationRepository for GeminiTranslationRepository {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String> {
        let prompt = build_translation_prompt(text, target_language);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        tracing::info!(
            model = %self.model,
            target_language = target_language,
            prompt_length = prompt.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body_preview = %body.chars().take(200).collect::<String>(),
                "Gemini returned an error status"
            );
            return Err(format!("Gemini returned HTTP {}", status.as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("Malformed Gemini response: {}", e))?;

        body.text()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| "Gemini response contained no text".to_string())
    }
}
