pub mod dto;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod service;

pub use dto::ProviderDescriptor;
pub use error::TranslationServiceError;
pub use prompt::build_translation_prompt;
pub use provider::{ProviderDefaults, ProviderKind, ProviderSelection, TranslationProvider};
pub use service::{GeminiSettings, TranslationService, TranslationServiceApi};
