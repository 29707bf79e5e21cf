use serde::{Deserialize, Serialize};

/// Response for POST /api/extract
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub text: String,
    pub preview: String,
    pub characters: usize,
}
