use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_gemini_credential_in_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("gemini").and_then(|v| v.as_str()), Some("configured"));
    assert_eq!(body.as_object().map(|o| o.len()), Some(2));

    let client = ctx.client_without_gemini_key().await;
    let response = client.get("/health/ready").await.unwrap();
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("gemini").and_then(|v| v.as_str()),
        Some("missing_credential")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx
        .client
        .post("/api/speech", &serde_json::json!({"text": "Hi", "language": "Klingon"}))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_header_exists("x-request-id");
}
