use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use super::upload::UploadForm;
use crate::{
    domain::extraction::{preview, ExtractResponse, ExtractionService},
    error::AppResult,
};

pub struct ExtractController {
    extraction_service: ExtractionService,
}

impl ExtractController {
    pub fn new(extraction_service: ExtractionService) -> Self {
        Self { extraction_service }
    }

    /// POST /api/extract - Extract the text of an uploaded document
    pub async fn extract(
        State(controller): State<Arc<ExtractController>>,
        multipart: Multipart,
    ) -> AppResult<Json<ExtractResponse>> {
        let file = UploadForm::read(multipart).await?.take_file()?;
        file.ensure_supported()?;

        let text = controller
            .extraction_service
            .extract(&file.file_name, file.bytes)
            .await?;

        Ok(Json(ExtractResponse {
            preview: preview(&text),
            characters: text.chars().count(),
            file_name: file.file_name,
            text,
        }))
    }
}
