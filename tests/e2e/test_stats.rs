use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_empty_progress(ctx: &TestContext) {
    let response = ctx.client.get("/api/stats").await.unwrap();
    response.assert_status(StatusCode::OK);

    assert_eq!(
        response.body(),
        &json!({
            "recorded": 0,
            "total": 10,
            "duration": 0,
            "quality": "No Data",
            "percentage": 0
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_progress_after_recording(ctx: &TestContext) {
    for phrase_id in 1..=4 {
        ctx.fixtures.create_recording(phrase_id, "good").await.unwrap();
    }
    ctx.fixtures.create_recording(5, "poor").await.unwrap();

    let response = ctx.client.get("/api/stats").await.unwrap();
    response.assert_status(StatusCode::OK);

    // 4 of 5 good is above the 70% threshold; fixtures record 4 seconds each
    assert_eq!(
        response.body(),
        &json!({
            "recorded": 5,
            "total": 10,
            "duration": 20,
            "quality": "Good",
            "percentage": 5
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_fair_quality(ctx: &TestContext) {
    ctx.fixtures.create_recording(1, "good").await.unwrap();
    ctx.fixtures.create_recording(2, "fair").await.unwrap();

    let response = ctx.client.get("/api/stats").await.unwrap();
    assert_eq!(response.body()["quality"], "Fair");
}
