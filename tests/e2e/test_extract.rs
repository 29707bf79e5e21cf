use crate::e2e::helpers;

use helpers::api_client::FormPart;
use helpers::{fixture, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_extract_plain_text(ctx: &TestContext) {
    let bytes = fixture("sample.txt");

    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "sample.txt",
                bytes: &bytes,
            }],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["file_name"], json!("sample.txt"));
    assert_eq!(body["text"], json!("Hello world\n"));
    assert_eq!(body["preview"], json!("Hello world\n"));
    assert_eq!(body["characters"], json!(12));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_extract_csv_cells_including_header(ctx: &TestContext) {
    let bytes = fixture("sample.csv");

    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "people.CSV",
                bytes: &bytes,
            }],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap()["text"],
        json!("name greeting alice hello bob good morning")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_extract_first_worksheet(ctx: &TestContext) {
    let bytes = fixture("sample.xlsx");

    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "sample.xlsx",
                bytes: &bytes,
            }],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let text = response.body.as_ref().unwrap()["text"].as_str().unwrap().to_string();
    assert_eq!(text, "Word Meaning Hello A greeting World The earth");
    assert!(!text.contains("Ignored"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_truncate_preview_of_long_documents(ctx: &TestContext) {
    let bytes = "a".repeat(1500).into_bytes();

    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "long.txt",
                bytes: &bytes,
            }],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["characters"], json!(1500));
    assert_eq!(body["preview"], json!(format!("{}...", "a".repeat(1000))));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_file_types(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "slides.pptx",
                bytes: b"PK\x03\x04",
            }],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_kind("bad_request")
        .assert_error_message("slides.pptx");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_unreadable_documents(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "broken.xlsx",
                bytes: b"not a workbook",
            }],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_kind("extraction_failure");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_a_file_part(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/api/extract", &[FormPart::Text("note", "no file here")])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("file");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_uploads_over_the_size_limit(ctx: &TestContext) {
    let bytes = vec![b'a'; ctx.config.max_upload_bytes + 1];

    let response = ctx
        .client
        .post_multipart(
            "/api/extract",
            &[FormPart::File {
                name: "file",
                file_name: "huge.txt",
                bytes: &bytes,
            }],
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_kind("payload_too_large");
}
