pub mod gemini_translation_repository;
pub mod google_tts_repository;
pub mod llama_cpp_translation_repository;
pub mod ollama_translation_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use gemini_translation_repository::GeminiTranslationRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use llama_cpp_translation_repository::LlamaCppTranslationRepository;
pub use ollama_translation_repository::OllamaTranslationRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
