use crate::error::{AppError, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum RecordingServiceError {
    #[error("invalid recording data")]
    Invalid(Vec<FieldError>),
    #[error("recording not found")]
    NotFound,
    #[error("phrase not found")]
    PhraseNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for RecordingServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => RecordingServiceError::PhraseNotFound,
            AppError::Validation { errors, .. } => RecordingServiceError::Invalid(errors),
            other => RecordingServiceError::Other(anyhow::anyhow!(other.to_string())),
        }
    }
}

impl From<RecordingServiceError> for AppError {
    fn from(err: RecordingServiceError) -> Self {
        match err {
            RecordingServiceError::Invalid(errors) => AppError::Validation {
                message: "Invalid recording data".to_string(),
                errors,
            },
            RecordingServiceError::NotFound => AppError::NotFound("Recording".to_string()),
            RecordingServiceError::PhraseNotFound => AppError::NotFound("Phrase".to_string()),
            RecordingServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
