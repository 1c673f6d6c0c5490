use crate::error::{AppError, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum PhraseServiceError {
    #[error("invalid phrase data")]
    Invalid(Vec<FieldError>),
    #[error("phrase not found")]
    NotFound,
}

impl From<PhraseServiceError> for AppError {
    fn from(err: PhraseServiceError) -> Self {
        match err {
            PhraseServiceError::Invalid(errors) => AppError::Validation {
                message: "Invalid phrase data".to_string(),
                errors,
            },
            PhraseServiceError::NotFound => AppError::NotFound("Phrase".to_string()),
        }
    }
}
