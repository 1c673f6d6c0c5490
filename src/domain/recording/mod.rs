pub mod audio;
pub mod error;
pub mod model;
pub mod service;

pub use audio::VoiceSample;
pub use error::RecordingServiceError;
pub use model::{NewRecording, Quality, Recording};
pub use service::{
    RecordingService, RecordingServiceApi, MAX_RECORDING_BODY_BYTES, MAX_RECORDING_SECONDS,
};

use serde::{Deserialize, Serialize};

/// Request for POST /api/recordings
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordingRequest {
    pub phrase_id: u32,
    pub audio_data: String,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}
