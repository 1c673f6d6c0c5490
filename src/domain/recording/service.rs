use super::audio::decode_data_url;
use super::error::RecordingServiceError;
use super::model::{NewRecording, Quality, Recording};
use super::CreateRecordingRequest;
use crate::error::FieldError;
use crate::infrastructure::repositories::RecordingRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Clips longer than this are almost certainly a stuck recorder
pub const MAX_RECORDING_SECONDS: u32 = 600;

/// Highest audio bitrate expected from a browser recorder (bits per second)
const MAX_AUDIO_BITRATE: usize = 256_000;

/// Request body limit for recording uploads: the longest allowed clip at the
/// highest expected bitrate, base64 encoded, plus room for the JSON envelope
pub const MAX_RECORDING_BODY_BYTES: usize =
    (MAX_RECORDING_SECONDS as usize * MAX_AUDIO_BITRATE / 8).div_ceil(3) * 4 + 64 * 1024;

pub struct RecordingService {
    recording_repo: Arc<RecordingRepository>,
}

impl RecordingService {
    pub fn new(recording_repo: Arc<RecordingRepository>) -> Self {
        Self { recording_repo }
    }
}

#[async_trait]
pub trait RecordingServiceApi: Send + Sync {
    async fn list_recordings(&self) -> Result<Vec<Recording>, RecordingServiceError>;

    async fn get_recording(&self, id: u32) -> Result<Recording, RecordingServiceError>;

    /// Store a recording and mark its phrase as recorded
    async fn create_recording(
        &self,
        request: CreateRecordingRequest,
    ) -> Result<Recording, RecordingServiceError>;

    async fn delete_recording(&self, id: u32) -> Result<(), RecordingServiceError>;
}

#[async_trait]
impl RecordingServiceApi for RecordingService {
    async fn list_recordings(&self) -> Result<Vec<Recording>, RecordingServiceError> {
        Ok(self.recording_repo.find_all().await)
    }

    async fn get_recording(&self, id: u32) -> Result<Recording, RecordingServiceError> {
        self.recording_repo
            .find_by_id(id)
            .await
            .ok_or(RecordingServiceError::NotFound)
    }

    async fn create_recording(
        &self,
        request: CreateRecordingRequest,
    ) -> Result<Recording, RecordingServiceError> {
        let mut errors = Vec::new();

        if let Err(e) = decode_data_url(&request.audio_data) {
            errors.push(FieldError::new("audioData", e.to_string()));
        }
        if request.duration > MAX_RECORDING_SECONDS {
            errors.push(FieldError::new(
                "duration",
                format!("Duration must be {} seconds or less", MAX_RECORDING_SECONDS),
            ));
        }
        let quality = match request.quality.as_deref() {
            Some(value) => value.parse().unwrap_or_else(|e: String| {
                errors.push(FieldError::new("quality", e));
                Quality::default()
            }),
            None => Quality::default(),
        };

        if !errors.is_empty() {
            return Err(RecordingServiceError::Invalid(errors));
        }

        let recording = self
            .recording_repo
            .create(NewRecording {
                phrase_id: request.phrase_id,
                audio_data: request.audio_data,
                duration: request.duration,
                quality,
            })
            .await?;

        tracing::info!(
            recording_id = recording.id,
            phrase_id = recording.phrase_id,
            duration = recording.duration,
            quality = %recording.quality,
            "Recording stored"
        );

        Ok(recording)
    }

    async fn delete_recording(&self, id: u32) -> Result<(), RecordingServiceError> {
        if !self.recording_repo.delete(id).await {
            return Err(RecordingServiceError::NotFound);
        }
        tracing::info!(recording_id = id, "Recording deleted");
        Ok(())
    }
}
