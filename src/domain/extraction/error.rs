use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("text file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("could not read PDF: {0}")]
    Pdf(String),
    #[error("could not read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not read spreadsheet: {0}")]
    Spreadsheet(String),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::ExtractionFailure(err.to_string())
    }
}
