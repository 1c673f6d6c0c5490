use serde_json::Value;

pub fn assert_phrase_response(phrase: &Value, expected_text: &str) {
    assert!(phrase.get("id").and_then(|v| v.as_u64()).is_some());
    assert_eq!(
        phrase.get("text").and_then(|v| v.as_str()),
        Some(expected_text)
    );
    assert!(phrase.get("category").and_then(|v| v.as_str()).is_some());
    assert!(phrase.get("isRecorded").and_then(|v| v.as_bool()).is_some());
    assert!(phrase.get("difficulty").and_then(|v| v.as_str()).is_some());
    assert!(phrase.get("createdAt").is_some());
}

pub fn assert_recording_response(recording: &Value, expected_phrase_id: u64) {
    assert!(recording.get("id").and_then(|v| v.as_u64()).is_some());
    assert_eq!(
        recording.get("phraseId").and_then(|v| v.as_u64()),
        Some(expected_phrase_id)
    );
    assert!(recording
        .get("audioData")
        .and_then(|v| v.as_str())
        .is_some_and(|s| s.starts_with("data:audio/")));
    assert!(recording.get("duration").and_then(|v| v.as_u64()).is_some());
    assert!(recording.get("quality").and_then(|v| v.as_str()).is_some());
    assert!(recording.get("createdAt").is_some());
}

pub fn assert_tts_generation_response(generation: &Value, expected_text: &str) {
    assert!(generation.get("id").and_then(|v| v.as_u64()).is_some());
    assert_eq!(
        generation.get("inputText").and_then(|v| v.as_str()),
        Some(expected_text)
    );
    assert!(generation
        .get("audioData")
        .and_then(|v| v.as_str())
        .is_some_and(|s| s.starts_with("data:audio/mpeg;base64,")));
    assert!(generation.get("speed").and_then(|v| v.as_str()).is_some());
    assert!(generation.get("pitch").and_then(|v| v.as_str()).is_some());
    assert!(generation.get("duration").and_then(|v| v.as_u64()).is_some());
    assert!(generation.get("createdAt").is_some());
}

/// Validation failures carry a message and a list of field errors
pub fn assert_validation_error(body: &Value, expected_message: &str, expected_field: &str) {
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some(expected_message)
    );
    let errors = body
        .get("errors")
        .and_then(|v| v.as_array())
        .expect("Missing errors array");
    assert!(
        errors
            .iter()
            .any(|e| e.get("field").and_then(|f| f.as_str()) == Some(expected_field)),
        "Expected an error for field '{}', got {:?}",
        expected_field,
        errors
    );
}
