use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::recording::model::{NewRecording, Recording};
use crate::error::{AppError, AppResult};
use crate::infrastructure::store::MemoryStore;

pub struct RecordingRepository {
    store: Arc<MemoryStore>,
}

impl RecordingRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Insert a recording and mark its phrase as recorded
    pub async fn create(&self, new_recording: NewRecording) -> AppResult<Recording> {
        let mut state = self.store.write().await;

        if !state.phrases.contains_key(&new_recording.phrase_id) {
            return Err(AppError::NotFound("Phrase".to_string()));
        }

        let id = state.allocate_recording_id();
        let recording = Recording {
            id,
            phrase_id: new_recording.phrase_id,
            audio_data: new_recording.audio_data,
            duration: new_recording.duration,
            quality: new_recording.quality,
            created_at: Utc::now(),
        };
        state.recordings.insert(id, recording.clone());

        if let Some(phrase) = state.phrases.get_mut(&recording.phrase_id) {
            phrase.is_recorded = true;
            phrase.recording_id = Some(id);
        }

        Ok(recording)
    }

    pub async fn find_by_id(&self, id: u32) -> Option<Recording> {
        self.store.read().await.recordings.get(&id).cloned()
    }

    /// All recordings, newest first
    pub async fn find_all(&self) -> Vec<Recording> {
        let mut recordings: Vec<Recording> =
            self.store.read().await.recordings.values().cloned().collect();
        recordings.sort_by(newest_first);
        recordings
    }

    pub async fn find_by_phrase(&self, phrase_id: u32) -> Vec<Recording> {
        let mut recordings: Vec<Recording> = self
            .store
            .read()
            .await
            .recordings
            .values()
            .filter(|r| r.phrase_id == phrase_id)
            .cloned()
            .collect();
        recordings.sort_by(newest_first);
        recordings
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.recordings.len()
    }

    /// Remove a recording and relink its phrase to whatever remains
    pub async fn delete(&self, id: u32) -> bool {
        let mut state = self.store.write().await;
        match state.recordings.remove(&id) {
            Some(recording) => {
                state.relink_phrase(recording.phrase_id);
                true
            }
            None => false,
        }
    }
}

fn newest_first(a: &Recording, b: &Recording) -> Ordering {
    b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
}
