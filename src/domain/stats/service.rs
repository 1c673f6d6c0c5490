use super::StatsResponse;
use crate::domain::recording::{Quality, Recording};
use crate::infrastructure::repositories::{PhraseRepository, RecordingRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Progress is measured against at least this many phrases
const TARGET_PHRASE_COUNT: usize = 100;
const GOOD_QUALITY_THRESHOLD: f64 = 0.7;

pub struct StatsService {
    phrase_repo: Arc<PhraseRepository>,
    recording_repo: Arc<RecordingRepository>,
}

impl StatsService {
    pub fn new(phrase_repo: Arc<PhraseRepository>, recording_repo: Arc<RecordingRepository>) -> Self {
        Self {
            phrase_repo,
            recording_repo,
        }
    }
}

#[async_trait]
pub trait StatsServiceApi: Send + Sync {
    /// Recording progress across the phrase library
    async fn get_stats(&self) -> StatsResponse;
}

#[async_trait]
impl StatsServiceApi for StatsService {
    async fn get_stats(&self) -> StatsResponse {
        let recordings = self.recording_repo.find_all().await;
        let total = self.phrase_repo.count().await;
        compute_stats(&recordings, total)
    }
}

pub fn compute_stats(recordings: &[Recording], total_phrases: usize) -> StatsResponse {
    let recorded = recordings.len();
    let duration = recordings.iter().map(|r| r.duration as u64).sum();

    let quality = if recorded == 0 {
        "No Data"
    } else {
        let good = recordings.iter().filter(|r| r.quality == Quality::Good).count();
        if good as f64 / recorded as f64 > GOOD_QUALITY_THRESHOLD {
            "Good"
        } else {
            "Fair"
        }
    };

    let denominator = total_phrases.max(TARGET_PHRASE_COUNT) as f64;
    let percentage = (recorded as f64 / denominator * 100.0).round() as u32;

    StatsResponse {
        recorded,
        total: total_phrases,
        duration,
        quality: quality.to_string(),
        percentage,
    }
}
