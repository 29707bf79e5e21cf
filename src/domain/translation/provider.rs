use serde::{Deserialize, Serialize};

/// Which translation backend a request selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[serde(alias = "Google Gemini")]
    Gemini,
    #[serde(alias = "Ollama (Local)")]
    Ollama,
    #[serde(alias = "Llama.cpp Server (Local)")]
    LlamaCpp,
}

impl ProviderKind {
    pub const ALL: &'static [ProviderKind] =
        &[ProviderKind::Gemini, ProviderKind::Ollama, ProviderKind::LlamaCpp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
            ProviderKind::LlamaCpp => "llama_cpp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Google Gemini",
            ProviderKind::Ollama => "Ollama (Local)",
            ProviderKind::LlamaCpp => "Llama.cpp Server (Local)",
        }
    }

    /// Parse the wire name or the display name
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value || kind.display_name() == value)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Defaults applied when a request leaves provider parameters out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDefaults {
    pub ollama_model: String,
    pub ollama_url: String,
    pub llama_cpp_url: String,
}

/// Provider selection as it arrives from a client: a kind plus optional
/// connection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSelection {
    pub provider: ProviderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProviderSelection {
    /// Fill in missing parameters; blank values count as missing
    pub fn resolve(self, defaults: &ProviderDefaults) -> TranslationProvider {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        match self.provider {
            ProviderKind::Gemini => TranslationProvider::Gemini,
            ProviderKind::Ollama => TranslationProvider::Ollama {
                model: non_blank(self.model).unwrap_or_else(|| defaults.ollama_model.clone()),
                url: non_blank(self.url).unwrap_or_else(|| defaults.ollama_url.clone()),
            },
            ProviderKind::LlamaCpp => TranslationProvider::LlamaCpp {
                url: non_blank(self.url).unwrap_or_else(|| defaults.llama_cpp_url.clone()),
            },
        }
    }
}

/// A fully specified translation backend. Each variant carries exactly the
/// parameters its backend needs; the Gemini credential comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum TranslationProvider {
    Gemini,
    Ollama { model: String, url: String },
    LlamaCpp { url: String },
}

impl TranslationProvider {
    pub fn kind(&self) -> ProviderKind {
        match self {
            TranslationProvider::Gemini => ProviderKind::Gemini,
            TranslationProvider::Ollama { .. } => ProviderKind::Ollama,
            TranslationProvider::LlamaCpp { .. } => ProviderKind::LlamaCpp,
        }
    }
}
