use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),
    #[error("translation backend error: {0}")]
    Dependency(String),
    #[error("translation backend returned an empty translation")]
    Empty,
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::ConfigurationMissing(msg) => AppError::ConfigurationMissing(msg),
            TranslationServiceError::Dependency(msg) => AppError::TranslationFailure(msg),
            TranslationServiceError::Empty => {
                AppError::TranslationFailure("empty translation".to_string())
            }
        }
    }
}
