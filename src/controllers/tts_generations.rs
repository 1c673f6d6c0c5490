use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    controllers::{EntityId, MessageResponse},
    domain::tts::{CreateTtsGenerationRequest, TtsGeneration, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /api/tts-generations - List generated clips, newest first
    pub async fn list_generations(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<Vec<TtsGeneration>>> {
        Ok(Json(controller.tts_service.list_generations().await?))
    }

    /// GET /api/tts-generations/:id
    pub async fn get_generation(
        State(controller): State<Arc<TtsController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<TtsGeneration>> {
        Ok(Json(controller.tts_service.get_generation(id).await?))
    }

    /// POST /api/tts-generations - Synthesize text in the cloned voice
    pub async fn create_generation(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<CreateTtsGenerationRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<TtsGeneration>)> {
        let Json(request) =
            payload.map_err(|e| AppError::from_json_rejection("Invalid TTS generation data", e))?;
        let generation = controller.tts_service.generate(request).await?;
        Ok((StatusCode::CREATED, Json(generation)))
    }

    /// DELETE /api/tts-generations/:id
    pub async fn delete_generation(
        State(controller): State<Arc<TtsController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<MessageResponse>> {
        controller.tts_service.delete_generation(id).await?;
        Ok(Json(MessageResponse::new("TTS generation deleted successfully")))
    }
}
