use chrono::Utc;
use std::sync::Arc;

use crate::domain::tts::model::{NewTtsGeneration, TtsGeneration};
use crate::infrastructure::store::MemoryStore;

pub struct TtsGenerationRepository {
    store: Arc<MemoryStore>,
}

impl TtsGenerationRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, generation: NewTtsGeneration) -> TtsGeneration {
        let mut state = self.store.write().await;
        let id = state.allocate_tts_generation_id();
        let generation = TtsGeneration {
            id,
            input_text: generation.input_text,
            audio_data: generation.audio_data,
            speed: generation.speed,
            pitch: generation.pitch,
            duration: generation.duration,
            created_at: Utc::now(),
        };
        state.tts_generations.insert(id, generation.clone());
        generation
    }

    pub async fn find_by_id(&self, id: u32) -> Option<TtsGeneration> {
        self.store.read().await.tts_generations.get(&id).cloned()
    }

    /// All generations, newest first
    pub async fn find_all(&self) -> Vec<TtsGeneration> {
        let mut generations: Vec<TtsGeneration> = self
            .store
            .read()
            .await
            .tts_generations
            .values()
            .cloned()
            .collect();
        generations.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        generations
    }

    pub async fn delete(&self, id: u32) -> bool {
        self.store.write().await.tts_generations.remove(&id).is_some()
    }
}
