use crate::error::{AppError, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid TTS generation data")]
    Invalid(Vec<FieldError>),
    #[error("TTS generation not found")]
    NotFound,
    /// Provider missing, too few samples, or a remote call failed
    #[error("{0}")]
    Generation(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(errors) => AppError::Validation {
                message: "Invalid TTS generation data".to_string(),
                errors,
            },
            TtsServiceError::NotFound => AppError::NotFound("TTS generation".to_string()),
            TtsServiceError::Generation(msg) => AppError::SpeechGeneration(msg),
        }
    }
}
