pub mod dto;
pub mod error;
pub mod service;

pub use dto::ExtractResponse;
pub use error::ExtractionError;
pub use service::{preview, DocumentKind, ExtractionService, PREVIEW_CHARS};
