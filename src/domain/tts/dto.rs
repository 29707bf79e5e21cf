use serde::{Deserialize, Serialize};

/// Request for POST /api/speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    /// Language code (`fr`) or display name (`French`)
    pub language: String,
}
