use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::phrase::model::{Difficulty, Phrase, DEFAULT_CATEGORY, DEFAULT_PHRASES};
use crate::domain::recording::model::Recording;
use crate::domain::tts::model::TtsGeneration;

/// Process-lifetime storage shared by all repositories.
///
/// All three tables sit behind one lock so that phrase/recording
/// bookkeeping happens atomically with the write that triggers it.
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

#[derive(Debug)]
pub struct StoreState {
    pub phrases: BTreeMap<u32, Phrase>,
    pub recordings: BTreeMap<u32, Recording>,
    pub tts_generations: BTreeMap<u32, TtsGeneration>,
    next_phrase_id: u32,
    next_recording_id: u32,
    next_tts_generation_id: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Store pre-populated with the default training phrases
    pub fn with_default_phrases() -> Self {
        let mut state = StoreState::default();
        for text in DEFAULT_PHRASES {
            let id = state.allocate_phrase_id();
            state.phrases.insert(
                id,
                Phrase {
                    id,
                    text: text.to_string(),
                    category: DEFAULT_CATEGORY.to_string(),
                    is_recorded: false,
                    recording_id: None,
                    difficulty: Difficulty::Medium,
                    created_at: Utc::now(),
                },
            );
        }
        tracing::debug!(count = state.phrases.len(), "Seeded default phrases");

        Self {
            state: RwLock::new(state),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            phrases: BTreeMap::new(),
            recordings: BTreeMap::new(),
            tts_generations: BTreeMap::new(),
            next_phrase_id: 1,
            next_recording_id: 1,
            next_tts_generation_id: 1,
        }
    }
}

impl StoreState {
    pub fn allocate_phrase_id(&mut self) -> u32 {
        let id = self.next_phrase_id;
        self.next_phrase_id += 1;
        id
    }

    pub fn allocate_recording_id(&mut self) -> u32 {
        let id = self.next_recording_id;
        self.next_recording_id += 1;
        id
    }

    pub fn allocate_tts_generation_id(&mut self) -> u32 {
        let id = self.next_tts_generation_id;
        self.next_tts_generation_id += 1;
        id
    }

    /// Point a phrase at its most recent recording, or mark it unrecorded
    pub fn relink_phrase(&mut self, phrase_id: u32) {
        let latest = self
            .recordings
            .values()
            .filter(|r| r.phrase_id == phrase_id)
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)))
            .map(|r| r.id);

        if let Some(phrase) = self.phrases.get_mut(&phrase_id) {
            phrase.is_recorded = latest.is_some();
            phrase.recording_id = latest;
        }
    }
}
