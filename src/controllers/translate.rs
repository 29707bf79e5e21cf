use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use std::sync::Arc;

use super::upload::UploadForm;
use crate::{
    domain::{
        translation::{ProviderDefaults, ProviderKind, ProviderSelection},
        tts::LanguageCode,
        workflow::{
            SourceInput, TranslateRequest, TranslationOutcomeResponse, WorkflowRequest,
            WorkflowService,
        },
    },
    error::{AppError, AppResult},
};

pub struct TranslateController {
    workflow_service: Arc<WorkflowService>,
    provider_defaults: ProviderDefaults,
}

impl TranslateController {
    pub fn new(workflow_service: Arc<WorkflowService>, provider_defaults: ProviderDefaults) -> Self {
        Self {
            workflow_service,
            provider_defaults,
        }
    }

    /// POST /api/translate - Translate typed text and synthesize it
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        payload: Result<Json<TranslateRequest>, JsonRejection>,
    ) -> AppResult<Json<TranslationOutcomeResponse>> {
        let Json(request) = payload?;
        let target_language = resolve_language(&request.target_language)?;

        let outcome = controller
            .workflow_service
            .run(WorkflowRequest {
                source: SourceInput::Text(request.text),
                target_language,
                provider: request.selection.resolve(&controller.provider_defaults),
            })
            .await?;

        Ok(Json(outcome.into()))
    }

    /// POST /api/translate/upload - Translate an uploaded document and synthesize it
    pub async fn translate_upload(
        State(controller): State<Arc<TranslateController>>,
        multipart: Multipart,
    ) -> AppResult<Json<TranslationOutcomeResponse>> {
        let mut form = UploadForm::read(multipart).await?;
        let file = form.take_file()?;
        file.ensure_supported()?;

        let target_language = resolve_language(&form.required_field("target_language")?)?;
        let provider_name = form.required_field("provider")?;
        let provider = ProviderKind::parse(&provider_name).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown provider '{}'", provider_name))
        })?;
        let selection = ProviderSelection {
            provider,
            model: form.field("model"),
            url: form.field("url"),
        };

        let outcome = controller
            .workflow_service
            .run(WorkflowRequest {
                source: SourceInput::Document {
                    file_name: file.file_name,
                    bytes: file.bytes,
                },
                target_language,
                provider: selection.resolve(&controller.provider_defaults),
            })
            .await?;

        Ok(Json(outcome.into()))
    }
}

pub(crate) fn resolve_language(value: &str) -> Result<LanguageCode, AppError> {
    LanguageCode::resolve(value)
        .ok_or_else(|| AppError::BadRequest(format!("Unsupported language '{}'", value.trim())))
}
