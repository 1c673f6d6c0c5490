use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    controllers::{EntityId, MessageResponse},
    domain::phrase::{CreatePhraseRequest, Phrase, PhraseService, PhraseServiceApi, UpdatePhraseRequest},
    domain::recording::Recording,
    error::{AppError, AppResult},
};

pub struct PhraseController {
    phrase_service: Arc<PhraseService>,
}

impl PhraseController {
    pub fn new(phrase_service: Arc<PhraseService>) -> Self {
        Self { phrase_service }
    }

    /// GET /api/phrases - List phrases
    pub async fn list_phrases(
        State(controller): State<Arc<PhraseController>>,
    ) -> AppResult<Json<Vec<Phrase>>> {
        Ok(Json(controller.phrase_service.list_phrases().await?))
    }

    /// GET /api/phrases/:id - Get one phrase
    pub async fn get_phrase(
        State(controller): State<Arc<PhraseController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<Phrase>> {
        Ok(Json(controller.phrase_service.get_phrase(id).await?))
    }

    /// GET /api/phrases/:id/recordings - Recordings made for a phrase
    pub async fn list_phrase_recordings(
        State(controller): State<Arc<PhraseController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<Vec<Recording>>> {
        Ok(Json(controller.phrase_service.get_phrase_recordings(id).await?))
    }

    /// POST /api/phrases - Create phrase
    pub async fn create_phrase(
        State(controller): State<Arc<PhraseController>>,
        payload: Result<Json<CreatePhraseRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<Phrase>)> {
        let Json(request) =
            payload.map_err(|e| AppError::from_json_rejection("Invalid phrase data", e))?;
        let phrase = controller.phrase_service.create_phrase(request).await?;
        Ok((StatusCode::CREATED, Json(phrase)))
    }

    /// PATCH /api/phrases/:id - Update phrase
    pub async fn update_phrase(
        State(controller): State<Arc<PhraseController>>,
        EntityId(id): EntityId,
        payload: Result<Json<UpdatePhraseRequest>, JsonRejection>,
    ) -> AppResult<Json<Phrase>> {
        let Json(request) =
            payload.map_err(|e| AppError::from_json_rejection("Invalid phrase data", e))?;
        Ok(Json(controller.phrase_service.update_phrase(id, request).await?))
    }

    /// DELETE /api/phrases/:id - Delete phrase
    pub async fn delete_phrase(
        State(controller): State<Arc<PhraseController>>,
        EntityId(id): EntityId,
    ) -> AppResult<Json<MessageResponse>> {
        controller.phrase_service.delete_phrase(id).await?;
        Ok(Json(MessageResponse::new("Phrase deleted successfully")))
    }
}
