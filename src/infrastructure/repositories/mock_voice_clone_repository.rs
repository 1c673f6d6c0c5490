use super::voice_clone_repository::VoiceCloneRepository;
use crate::domain::recording::audio::VoiceSample;
use async_trait::async_trait;

pub const MOCK_VOICE_ID: &str = "mock-voice";

/// MPEG-1 Layer III frame header followed by silence
const SILENT_FRAME: [u8; 8] = [0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Offline provider used for local development and tests.
/// Accepts every sample and returns a short silent MP3.
#[derive(Default)]
pub struct MockVoiceCloneRepository;

impl MockVoiceCloneRepository {
    pub fn new() -> Self {
        Self
    }
}

pub fn mock_audio_bytes(text: &str) -> Vec<u8> {
    // Roughly one frame per word so longer text yields longer audio
    let frames = text.split_whitespace().count().max(1);
    SILENT_FRAME.repeat(frames)
}

#[async_trait]
impl VoiceCloneRepository for MockVoiceCloneRepository {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn ensure_configured(&self) -> Result<(), String> {
        Ok(())
    }

    async fn create_voice(
        &self,
        name: &str,
        _description: &str,
        seed: &VoiceSample,
    ) -> Result<String, String> {
        tracing::info!(
            voice_name = name,
            seed_recording_id = seed.recording_id,
            "Mock voice created"
        );
        Ok(MOCK_VOICE_ID.to_string())
    }

    async fn add_sample(
        &self,
        voice_id: &str,
        _voice_name: &str,
        sample: &VoiceSample,
    ) -> Result<(), String> {
        tracing::debug!(
            voice_id = voice_id,
            recording_id = sample.recording_id,
            "Mock sample accepted"
        );
        Ok(())
    }

    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, String> {
        tracing::info!(voice_id = voice_id, text_length = text.len(), "Mock synthesis");
        Ok(mock_audio_bytes(text))
    }
}
