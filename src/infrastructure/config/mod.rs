use crate::domain::translation::ProviderDefaults;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Remote translation backend
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    // Local translation backends
    pub ollama_model: String,
    pub ollama_url: String,
    pub llama_cpp_url: String,
    // Speech backend
    pub tts_base_url: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_LLAMA_CPP_URL: &str = "http://localhost:8080/v1/chat/completions";
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: parse_environment(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            ),
            log_format: parse_log_format(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            gemini_api_key: non_blank(env::var("GEMINI_API_KEY").ok()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            ollama_model: env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
            ollama_url: env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            llama_cpp_url: env::var("LLAMA_CPP_URL")
                .unwrap_or_else(|_| DEFAULT_LLAMA_CPP_URL.to_string()),
            tts_base_url: env::var("TTS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TTS_BASE_URL.to_string()),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn has_gemini_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn provider_defaults(&self) -> ProviderDefaults {
        ProviderDefaults {
            ollama_model: self.ollama_model.clone(),
            ollama_url: self.ollama_url.clone(),
            llama_cpp_url: self.llama_cpp_url.clone(),
        }
    }
}

fn parse_environment(value: &str) -> Environment {
    match value.trim().to_lowercase().as_str() {
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}

fn parse_log_format(value: &str) -> LogFormat {
    match value.trim().to_lowercase().as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
