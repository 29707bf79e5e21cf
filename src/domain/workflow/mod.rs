pub mod dto;
pub mod error;
pub mod service;

pub use dto::{AudioPayload, TranslateRequest, TranslationOutcomeResponse};
pub use error::WorkflowError;
pub use service::{SourceInput, WorkflowOutcome, WorkflowRequest, WorkflowService, WorkflowStage};
