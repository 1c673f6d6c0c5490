use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsGeneration {
    pub id: u32,
    pub input_text: String,
    /// `data:audio/mpeg;base64,...`
    pub audio_data: String,
    pub speed: String,
    pub pitch: String,
    /// Estimated seconds
    pub duration: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTtsGeneration {
    pub input_text: String,
    pub audio_data: String,
    pub speed: String,
    pub pitch: String,
    pub duration: u32,
}
