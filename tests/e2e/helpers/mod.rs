use serde_json::json;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use translate_tts_backend::infrastructure::config::{Config, Environment, LogFormat};
use translate_tts_backend::infrastructure::http::create_app;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod api_client;

use api_client::TestClient;

pub const TEST_GEMINI_KEY: &str = "test-gemini-key";
pub const TEST_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Fake MP3 payload returned by the mocked speech backend
pub const FAKE_MP3: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x0F];

/// Mock servers standing in for every outbound backend
pub struct Backends {
    pub gemini: MockServer,
    pub ollama: MockServer,
    pub llama_cpp: MockServer,
    pub tts: MockServer,
}

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub backends: Backends,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let backends = Backends {
                gemini: MockServer::start().await,
                ollama: MockServer::start().await,
                llama_cpp: MockServer::start().await,
                tts: MockServer::start().await,
            };

            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                gemini_api_key: Some(TEST_GEMINI_KEY.to_string()),
                gemini_model: TEST_GEMINI_MODEL.to_string(),
                gemini_api_base: backends.gemini.uri(),
                ollama_model: "llama3".to_string(),
                ollama_url: format!("{}/api/generate", backends.ollama.uri()),
                llama_cpp_url: format!("{}/v1/chat/completions", backends.llama_cpp.uri()),
                tts_base_url: backends.tts.uri(),
                max_upload_bytes: 64 * 1024,
            };

            let client = spawn_app(config.clone()).await;

            Self {
                client,
                config,
                backends,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Mock servers shut down on drop
        }
    }
}

impl TestContext {
    /// Second app instance sharing the mock backends but with no Gemini credential
    pub async fn client_without_gemini_key(&self) -> TestClient {
        let mut config = self.config.clone();
        config.gemini_api_key = None;
        spawn_app(config).await
    }

    pub async fn mock_gemini_translation(&self, translation: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", TEST_GEMINI_MODEL)))
            .and(header("x-goog-api-key", TEST_GEMINI_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": translation}]}
                }]
            })))
            .mount(&self.backends.gemini)
            .await;
    }

    pub async fn mock_ollama_translation(&self, translation: &str) {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"model": "llama3", "response": translation, "done": true})),
            )
            .mount(&self.backends.ollama)
            .await;
    }

    pub async fn mock_llama_cpp_translation(&self, translation: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"index": 0, "message": {"role": "assistant", "content": translation}}]
            })))
            .mount(&self.backends.llama_cpp)
            .await;
    }

    pub async fn mock_speech(&self, language_code: &str) {
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .and(query_param("tl", language_code))
            .and(query_param("client", "tw-ob"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(FAKE_MP3),
            )
            .mount(&self.backends.tts)
            .await;
    }

    pub async fn mock_speech_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/translate_tts"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.backends.tts)
            .await;
    }

    /// Requests received by a mock server
    pub async fn request_count(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

async fn spawn_app(config: Config) -> TestClient {
    let app = create_app(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to be ready
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    TestClient::new(&base_url)
}

/// Read a file from tests/fixtures
pub fn fixture(name: &str) -> Vec<u8> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}
