use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;

use crate::domain::extraction::DocumentKind;
use crate::error::AppError;

/// A file part of a multipart upload
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Reject extensions the extractor cannot read
    pub fn ensure_supported(&self) -> Result<DocumentKind, AppError> {
        let kind = DocumentKind::from_file_name(&self.file_name);
        if !kind.is_supported() {
            return Err(AppError::BadRequest(format!(
                "Unsupported file type '{}', expected txt, pdf, csv or xlsx",
                self.file_name
            )));
        }
        Ok(kind)
    }
}

/// Every part of a multipart body: the `file` part plus plain text fields
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: Vec<(String, String)>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "file" {
                form.file = Some(read_file(field).await?);
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.push((name, value));
            }
        }

        Ok(form)
    }

    /// Value of a text field; blank counts as absent
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn required_field(&self, name: &str) -> Result<String, AppError> {
        self.field(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing form field '{}'", name)))
    }

    pub fn take_file(&mut self) -> Result<UploadedFile, AppError> {
        self.file
            .take()
            .ok_or_else(|| AppError::BadRequest("Missing form field 'file'".to_string()))
    }
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let file_name = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Uploaded file has no file name".to_string()))?;
    let bytes = field.bytes().await.map_err(multipart_error)?;

    Ok(UploadedFile {
        file_name,
        bytes: bytes.to_vec(),
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
