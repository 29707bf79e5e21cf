use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("{0}")]
    InputEmpty(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Translation failed: {0}")]
    TranslationFailure(String),

    #[error("Speech synthesis failed: {0}")]
    SynthesisFailure(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: a machine readable kind plus the message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InputEmpty(_) => StatusCode::BAD_REQUEST,
            Self::ConfigurationMissing(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::ExtractionFailure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::TranslationFailure(_) | Self::SynthesisFailure(_) => StatusCode::BAD_GATEWAY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::InputEmpty(_) => "input_empty",
            Self::ConfigurationMissing(_) => "configuration_missing",
            Self::ExtractionFailure(_) => "extraction_failure",
            Self::TranslationFailure(_) => "translation_failure",
            Self::SynthesisFailure(_) => "synthesis_failure",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Internal(_) => "internal",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            kind: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                kind = self.kind(),
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                kind = self.kind(),
                status = %status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// JSON body rejections render as `{kind, message}` too
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
