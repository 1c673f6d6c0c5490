use crate::e2e::helpers;

use helpers::{elevenlabs_config, TestContext};
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
async fn it_should_return_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("storage").and_then(|v| v.as_str()), Some("in_memory"));
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("available"));
    assert_eq!(body.get("provider").and_then(|v| v.as_str()), Some("mock"));
}

#[tokio::test]
async fn it_should_report_unconfigured_provider() {
    let ctx = TestContext::start(elevenlabs_config("http://127.0.0.1:9", None)).await;

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body();
    assert_eq!(body.get("tts").and_then(|v| v.as_str()), Some("unconfigured"));
    assert_eq!(body.get("provider").and_then(|v| v.as_str()), Some("elevenlabs"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/phrases").await.unwrap();
    response.assert_header_exists("x-request-id");

    // Errors carry it too
    let response = ctx.client.get("/api/phrases/999").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
