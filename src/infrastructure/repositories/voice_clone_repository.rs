use crate::domain::recording::audio::VoiceSample;
use async_trait::async_trait;

/// Repository for a remote voice cloning provider.
/// Abstracts the underlying provider (ElevenLabs, local mock, etc.)
///
/// Implementations are responsible for:
/// - Provider authentication
/// - Creating a remote voice from uploaded samples
/// - Synthesizing speech with a previously created voice
#[async_trait]
pub trait VoiceCloneRepository: Send + Sync {
    /// Short provider name for logs and health checks
    fn provider_name(&self) -> &'static str;

    /// Fails with a human readable reason when the provider cannot be used
    fn ensure_configured(&self) -> Result<(), String>;

    /// Create a remote voice seeded with one sample and return its id
    async fn create_voice(
        &self,
        name: &str,
        description: &str,
        seed: &VoiceSample,
    ) -> Result<String, String>;

    /// Upload one more sample to an existing voice
    async fn add_sample(
        &self,
        voice_id: &str,
        voice_name: &str,
        sample: &VoiceSample,
    ) -> Result<(), String>;

    /// Synthesize text with the given voice
    ///
    /// Returns MP3 audio
    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, String>;
}
