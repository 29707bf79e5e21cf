use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use translate_tts_backend::infrastructure::config::{Config, LogFormat};
use translate_tts_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Translate & Speak Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        environment = ?config.environment,
        gemini_model = %config.gemini_model,
        ollama_url = %config.ollama_url,
        llama_cpp_url = %config.llama_cpp_url,
        tts_base_url = %config.tts_base_url,
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    if !config.has_gemini_api_key() {
        tracing::warn!(
            "GEMINI_API_KEY not found in environment. The Gemini provider will be unavailable; local providers still work"
        );
    }

    if config.is_development() {
        tracing::debug!("Running in development mode");
    }

    start_http_server(Arc::new(config)).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "translate_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "translate_tts_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
