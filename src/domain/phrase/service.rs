use super::error::PhraseServiceError;
use super::model::{Difficulty, NewPhrase, Phrase, PhraseUpdate, DEFAULT_CATEGORY};
use super::{CreatePhraseRequest, UpdatePhraseRequest};
use crate::domain::recording::Recording;
use crate::error::FieldError;
use crate::infrastructure::repositories::{PhraseRepository, RecordingRepository};
use async_trait::async_trait;
use std::sync::Arc;

const MAX_PHRASE_LENGTH: usize = 500;

pub struct PhraseService {
    phrase_repo: Arc<PhraseRepository>,
    recording_repo: Arc<RecordingRepository>,
}

impl PhraseService {
    pub fn new(phrase_repo: Arc<PhraseRepository>, recording_repo: Arc<RecordingRepository>) -> Self {
        Self {
            phrase_repo,
            recording_repo,
        }
    }
}

#[async_trait]
pub trait PhraseServiceApi: Send + Sync {
    async fn list_phrases(&self) -> Result<Vec<Phrase>, PhraseServiceError>;

    async fn get_phrase(&self, id: u32) -> Result<Phrase, PhraseServiceError>;

    /// Recordings made for a phrase, newest first
    async fn get_phrase_recordings(&self, id: u32) -> Result<Vec<Recording>, PhraseServiceError>;

    async fn create_phrase(&self, request: CreatePhraseRequest)
        -> Result<Phrase, PhraseServiceError>;

    async fn update_phrase(
        &self,
        id: u32,
        request: UpdatePhraseRequest,
    ) -> Result<Phrase, PhraseServiceError>;

    async fn delete_phrase(&self, id: u32) -> Result<(), PhraseServiceError>;
}

#[async_trait]
impl PhraseServiceApi for PhraseService {
    async fn list_phrases(&self) -> Result<Vec<Phrase>, PhraseServiceError> {
        Ok(self.phrase_repo.find_all().await)
    }

    async fn get_phrase(&self, id: u32) -> Result<Phrase, PhraseServiceError> {
        self.phrase_repo
            .find_by_id(id)
            .await
            .ok_or(PhraseServiceError::NotFound)
    }

    async fn get_phrase_recordings(&self, id: u32) -> Result<Vec<Recording>, PhraseServiceError> {
        self.get_phrase(id).await?;
        Ok(self.recording_repo.find_by_phrase(id).await)
    }

    async fn create_phrase(
        &self,
        request: CreatePhraseRequest,
    ) -> Result<Phrase, PhraseServiceError> {
        let mut errors = Vec::new();

        let text = validate_text(&request.text, &mut errors);
        let category = match request.category {
            Some(category) => validate_category(&category, &mut errors),
            None => DEFAULT_CATEGORY.to_string(),
        };
        let difficulty = match request.difficulty {
            Some(difficulty) => parse_difficulty(&difficulty, &mut errors),
            None => Difficulty::default(),
        };

        if !errors.is_empty() {
            return Err(PhraseServiceError::Invalid(errors));
        }

        let phrase = self
            .phrase_repo
            .create(NewPhrase {
                text,
                category,
                difficulty,
            })
            .await;

        tracing::info!(phrase_id = phrase.id, difficulty = %phrase.difficulty, "Phrase created");
        Ok(phrase)
    }

    async fn update_phrase(
        &self,
        id: u32,
        request: UpdatePhraseRequest,
    ) -> Result<Phrase, PhraseServiceError> {
        let mut errors = Vec::new();

        let update = PhraseUpdate {
            text: request.text.map(|t| validate_text(&t, &mut errors)),
            category: request.category.map(|c| validate_category(&c, &mut errors)),
            difficulty: request.difficulty.map(|d| parse_difficulty(&d, &mut errors)),
        };

        if !errors.is_empty() {
            return Err(PhraseServiceError::Invalid(errors));
        }

        self.phrase_repo
            .update(id, update)
            .await
            .ok_or(PhraseServiceError::NotFound)
    }

    async fn delete_phrase(&self, id: u32) -> Result<(), PhraseServiceError> {
        if !self.phrase_repo.delete(id).await {
            return Err(PhraseServiceError::NotFound);
        }
        tracing::info!(phrase_id = id, "Phrase deleted");
        Ok(())
    }
}

fn validate_text(text: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("text", "Text cannot be empty"));
    } else if trimmed.chars().count() > MAX_PHRASE_LENGTH {
        errors.push(FieldError::new(
            "text",
            format!("Text must be {} characters or less", MAX_PHRASE_LENGTH),
        ));
    }
    trimmed.to_string()
}

fn validate_category(category: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new("category", "Category cannot be empty"));
    }
    trimmed.to_string()
}

fn parse_difficulty(value: &str, errors: &mut Vec<FieldError>) -> Difficulty {
    value.parse().unwrap_or_else(|e: String| {
        errors.push(FieldError::new("difficulty", e));
        Difficulty::default()
    })
}
