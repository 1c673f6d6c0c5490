use chrono::Utc;
use std::sync::Arc;

use crate::domain::phrase::model::{NewPhrase, Phrase, PhraseUpdate};
use crate::infrastructure::store::MemoryStore;

pub struct PhraseRepository {
    store: Arc<MemoryStore>,
}

impl PhraseRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new_phrase: NewPhrase) -> Phrase {
        let mut state = self.store.write().await;
        let id = state.allocate_phrase_id();
        let phrase = Phrase {
            id,
            text: new_phrase.text,
            category: new_phrase.category,
            is_recorded: false,
            recording_id: None,
            difficulty: new_phrase.difficulty,
            created_at: Utc::now(),
        };
        state.phrases.insert(id, phrase.clone());
        phrase
    }

    pub async fn find_by_id(&self, id: u32) -> Option<Phrase> {
        self.store.read().await.phrases.get(&id).cloned()
    }

    /// All phrases in ascending id order
    pub async fn find_all(&self) -> Vec<Phrase> {
        self.store.read().await.phrases.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.phrases.len()
    }

    pub async fn update(&self, id: u32, update: PhraseUpdate) -> Option<Phrase> {
        let mut state = self.store.write().await;
        let phrase = state.phrases.get_mut(&id)?;

        if let Some(text) = update.text {
            phrase.text = text;
        }
        if let Some(category) = update.category {
            phrase.category = category;
        }
        if let Some(difficulty) = update.difficulty {
            phrase.difficulty = difficulty;
        }

        Some(phrase.clone())
    }

    /// Recordings of a deleted phrase are kept as voice samples
    pub async fn delete(&self, id: u32) -> bool {
        self.store.write().await.phrases.remove(&id).is_some()
    }
}
