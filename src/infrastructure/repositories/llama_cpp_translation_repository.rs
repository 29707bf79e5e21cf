use super::translation_repository::TranslationRepository;
use crate::domain::translation::build_translation_prompt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// llama.cpp server (OpenAI style chat completions) implementation of the
/// translation repository
pub struct LlamaCppTranslationRepository {
    http: reqwest::Client,
    url: String,
}

impl LlamaCppTranslationRepository {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl TranslationRepository for LlamaCppTranslationRepository {
    fn provider_name(&self) -> &'static str {
        "llama_cpp"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String> {
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_translation_prompt(text, target_language),
            }],
        };

        tracing::info!(
            url = %self.url,
            target_language = target_language,
            "Calling llama.cpp chat completions"
        );

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("llama.cpp request failed: {}", e))?
            .error_for_status()
            .map_err(|e| format!("llama.cpp returned an error status: {}", e))?;

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("Malformed llama.cpp response: {}", e))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| "llama.cpp response has no message content".to_string())
    }
}
