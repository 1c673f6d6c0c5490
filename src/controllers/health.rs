use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::VoiceCloneRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Storage is in-process, so readiness only reports on the voice provider
pub async fn health_ready(
    State(voice_repo): State<Arc<dyn VoiceCloneRepository>>,
) -> impl IntoResponse {
    let tts = match voice_repo.ensure_configured() {
        Ok(()) => "available",
        Err(_) => "unconfigured",
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "storage": "in_memory",
            "tts": tts,
            "provider": voice_repo.provider_name()
        })),
    )
}
