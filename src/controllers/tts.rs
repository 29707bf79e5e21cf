use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use super::translate::resolve_language;
use crate::{
    domain::tts::{SpeechRequest, TtsServiceApi, AUDIO_FILE_NAME, AUDIO_MIME_TYPE},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<dyn TtsServiceApi>,
}

impl TtsController {
    pub fn new(tts_service: Arc<dyn TtsServiceApi>) -> Self {
        Self { tts_service }
    }

    /// POST /api/speech - Convert text to downloadable MP3 speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SpeechRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;
        let language = resolve_language(&request.language)?;

        let audio = controller
            .tts_service
            .synthesize(&request.text, language)
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MIME_TYPE));
        let disposition = format!("attachment; filename=\"{}\"", AUDIO_FILE_NAME);
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition).map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(audio.audio_data)))
    }
}
