pub mod health;
pub mod phrases;
pub mod recordings;
pub mod stats;
pub mod tts_generations;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Numeric `:id` path segment. Unparseable ids are rejected with a JSON 400.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityId(pub u32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u32>::from_request_parts(parts, state).await?;
        Ok(EntityId(id))
    }
}

/// Plain acknowledgement body, e.g. after a delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
