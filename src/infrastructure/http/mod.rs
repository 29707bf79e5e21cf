use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    controllers::{
        catalog::CatalogController, extract::ExtractController, health,
        translate::TranslateController, tts::TtsController,
    },
    domain::{
        extraction::ExtractionService,
        translation::{GeminiSettings, TranslationService, TranslationServiceApi},
        tts::{TtsService, TtsServiceApi},
        workflow::WorkflowService,
    },
    infrastructure::{auth::request_id_middleware, config::Config, repositories::GoogleTtsRepository},
};

/// Wire repositories, services and controllers from configuration
pub fn create_app(config: Arc<Config>) -> Router {
    let http = reqwest::Client::new();

    // 1. Repositories
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http.clone(),
        config.tts_base_url.clone(),
    ));

    // 2. Services
    let extraction_service = ExtractionService::new();
    let translation_service: Arc<dyn TranslationServiceApi> = Arc::new(TranslationService::new(
        http,
        GeminiSettings::from_config(&config),
    ));
    let tts_service: Arc<dyn TtsServiceApi> = Arc::new(TtsService::new(tts_repo));
    let workflow_service = Arc::new(WorkflowService::new(
        extraction_service.clone(),
        translation_service.clone(),
        tts_service.clone(),
    ));

    // 3. Controllers
    let catalog_controller = Arc::new(CatalogController::new(
        translation_service,
        config.provider_defaults(),
        config.gemini_model.clone(),
    ));
    let extract_controller = Arc::new(ExtractController::new(extraction_service));
    let translate_controller = Arc::new(TranslateController::new(
        workflow_service,
        config.provider_defaults(),
    ));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    create_router(
        config,
        catalog_controller,
        extract_controller,
        translate_controller,
        tts_controller,
    )
}

/// Build the route table around already constructed controllers
pub fn create_router(
    config: Arc<Config>,
    catalog_controller: Arc<CatalogController>,
    extract_controller: Arc<ExtractController>,
    translate_controller: Arc<TranslateController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let catalog_routes = Router::new()
        .route("/api/languages", get(CatalogController::list_languages))
        .route("/api/providers", get(CatalogController::list_providers))
        .with_state(catalog_controller);

    let extract_routes = Router::new()
        .route("/api/extract", post(ExtractController::extract))
        .with_state(extract_controller);

    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .route(
            "/api/translate/upload",
            post(TranslateController::translate_upload),
        )
        .with_state(translate_controller);

    let speech_routes = Router::new()
        .route("/api/speech", post(TtsController::synthesize))
        .with_state(tts_controller);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config.clone())
        .merge(catalog_routes)
        .merge(extract_routes)
        .merge(translate_routes)
        .merge(speech_routes)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(config: Arc<Config>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(config.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
