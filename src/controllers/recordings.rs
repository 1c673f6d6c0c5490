use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    controllers::{EntityId, MessageResponse},
    domain::recording::{CreateRecordingRequest, Recording, RecordingService, RecordingServiceApi},
    error::{AppError, AppResult},
};

pub struct RecordingController {
    recording_service: Arc<RecordingService>,
}

impl RecordingController {
    pub fn new(recording_service: Arc<RecordingService>) -> Self {
        Self { recording_service }
    }

    /// GET /api/recordings - List recordings, newest first
    pub async fn list_recordings(
        State(controller): State<Arc<RecordingController>>,
    ) -> AppResult<Json<Vec<Recording>>> {
        Ok(Json(controller.recording_service.list_recordings().await?))
    }

    /// GET /api/recordings/:id
    pub async fn get_recording(
        State(controller): State<Arc<RecordingController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<Recording>> {
        Ok(Json(controller.recording_service.get_recording(id).await?))
    }

    /// POST /api/recordings - Store a recording for a phrase
    pub async fn create_recording(
        State(controller): State<Arc<RecordingController>>,
        payload: Result<Json<CreateRecordingRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<Recording>)> {
        let Json(request) =
            payload.map_err(|e| AppError::from_json_rejection("Invalid recording data", e))?;
        let recording = controller.recording_service.create_recording(request).await?;
        Ok((StatusCode::CREATED, Json(recording)))
    }

    /// DELETE /api/recordings/:id
    pub async fn delete_recording(
        State(controller): State<Arc<RecordingController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<MessageResponse>> {
        controller.recording_service.delete_recording(id).await?;
        Ok(Json(MessageResponse::new("Recording deleted successfully")))
    }
}
