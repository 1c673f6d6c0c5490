use crate::e2e::helpers;

use helpers::assertions::{assert_recording_response, assert_validation_error};
use helpers::fixtures::SAMPLE_AUDIO;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use voice_studio_backend::domain::recording::{MAX_RECORDING_BODY_BYTES, MAX_RECORDING_SECONDS};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_a_recording_and_mark_the_phrase(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 1,
                "audioData": SAMPLE_AUDIO,
                "duration": 6
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let recording = response.body();
    assert_recording_response(recording, 1);
    assert_eq!(recording["quality"], "good");
    assert_eq!(recording["duration"], 6);

    let phrase = ctx.client.get("/api/phrases/1").await.unwrap();
    assert_eq!(phrase.body()["isRecorded"], true);
    assert_eq!(phrase.body()["recordingId"], recording["id"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_recordings_for_unknown_phrases(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 500,
                "audioData": SAMPLE_AUDIO,
                "duration": 3
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Phrase not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_recordings(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 1,
                "audioData": "plain text, not audio",
                "duration": 3
            }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_error(response.body(), "Invalid recording data", "audioData");

    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 1,
                "audioData": SAMPLE_AUDIO,
                "duration": 3,
                "quality": "superb"
            }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_error(response.body(), "Invalid recording data", "quality");

    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 1,
                "audioData": SAMPLE_AUDIO,
                "duration": -1
            }),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_validation_error(response.body(), "Invalid recording data", "body");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_recordings_newest_first(ctx: &TestContext) {
    ctx.fixtures.record_phrases(3).await.unwrap();

    let response = ctx.client.get("/api/recordings").await.unwrap();
    response.assert_status(StatusCode::OK);

    let ids: Vec<u64> = response
        .body()
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_delete_a_recording_and_unmark_the_phrase(ctx: &TestContext) {
    let recording = ctx.fixtures.create_recording(2, "good").await.unwrap();
    let id = recording["id"].as_u64().unwrap();

    let response = ctx
        .client
        .delete(&format!("/api/recordings/{}", id))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body(),
        &json!({ "message": "Recording deleted successfully" })
    );

    let phrase = ctx.client.get("/api/phrases/2").await.unwrap();
    assert_eq!(phrase.body()["isRecorded"], false);
    assert!(phrase.body()["recordingId"].is_null());

    let response = ctx
        .client
        .get(&format!("/api/recordings/{}", id))
        .await
        .unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("Recording not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_phrase_recorded_while_other_takes_remain(ctx: &TestContext) {
    let first = ctx.fixtures.create_recording(6, "good").await.unwrap();
    let second = ctx.fixtures.create_recording(6, "fair").await.unwrap();

    ctx.client
        .delete(&format!("/api/recordings/{}", second["id"]))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let phrase = ctx.client.get("/api/phrases/6").await.unwrap();
    assert_eq!(phrase.body()["isRecorded"], true);
    assert_eq!(phrase.body()["recordingId"], first["id"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_a_full_length_recording(ctx: &TestContext) {
    // Longest allowed clip at the highest expected bitrate, leaving only the envelope headroom
    let payload = "A".repeat(MAX_RECORDING_BODY_BYTES - 64 * 1024);
    let audio_data = format!("data:audio/webm;codecs=opus;base64,{}", payload);

    let response = ctx
        .client
        .post(
            "/api/recordings",
            &json!({
                "phraseId": 2,
                "audioData": audio_data,
                "duration": MAX_RECORDING_SECONDS,
                "quality": "good"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::CREATED);
    let recording = response.body();
    assert_recording_response(recording, 2);
    assert_eq!(recording["duration"], MAX_RECORDING_SECONDS);
    assert_eq!(recording["audioData"].as_str().map(str::len), Some(audio_data.len()));
}
