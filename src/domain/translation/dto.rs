use super::provider::ProviderKind;
use serde::{Deserialize, Serialize};

/// Entry of GET /api/providers
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub id: ProviderKind,
    pub name: String,
    /// False only for Gemini when no credential is configured
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_url: Option<String>,
}
