use crate::domain::extraction::ExtractionError;
use crate::domain::translation::TranslationServiceError;
use crate::error::AppError;

/// Reasons the workflow halts. Speech failures are not here: they leave the
/// translation in place and are reported on the outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("{0}")]
    ConfigurationMissing(String),
    #[error("Please enter some text or upload a valid file containing text")]
    InputEmpty,
    #[error(transparent)]
    ExtractionFailure(#[from] ExtractionError),
    #[error("{0}")]
    TranslationFailure(String),
}

impl From<TranslationServiceError> for WorkflowError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::ConfigurationMissing(msg) => {
                WorkflowError::ConfigurationMissing(msg)
            }
            other => WorkflowError::TranslationFailure(other.to_string()),
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::ConfigurationMissing(msg) => AppError::ConfigurationMissing(msg),
            WorkflowError::InputEmpty => AppError::InputEmpty(err.to_string()),
            WorkflowError::ExtractionFailure(e) => e.into(),
            WorkflowError::TranslationFailure(msg) => AppError::TranslationFailure(msg),
        }
    }
}
