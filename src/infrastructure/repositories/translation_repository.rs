use async_trait::async_trait;

/// Repository for translation backends.
/// Abstracts the LLM that performs the translation (Gemini, Ollama, llama.cpp).
///
/// Every implementation sends the same prompt, built by
/// `domain::translation::build_translation_prompt`.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Short provider name used in logs and responses
    fn provider_name(&self) -> &'static str;

    /// Translate `text` into the language called `target_language`
    ///
    /// Returns the trimmed translation.
    ///
    /// # Errors
    /// Returns error on network failure, non-2xx status or a malformed response
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, String>;
}
