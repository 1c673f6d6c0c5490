use super::dto::CreateTtsGenerationRequest;
use super::error::TtsServiceError;
use super::model::{NewTtsGeneration, TtsGeneration};
use crate::domain::recording::audio::{decode_data_url, encode_data_url, VoiceSample};
use crate::domain::recording::Recording;
use crate::error::FieldError;
use crate::infrastructure::repositories::{
    RecordingRepository, TtsGenerationRepository, VoiceCloneRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Samples required before a voice can be cloned
pub const MIN_VOICE_SAMPLES: usize = 10;
const MAX_INPUT_LENGTH: usize = 500;
/// Rough speaking rate used to estimate output length
const CHARACTERS_PER_SECOND: usize = 15;
const DEFAULT_RATE: &str = "1.0";
const MIN_RATE: f32 = 0.25;
const MAX_RATE: f32 = 4.0;

const VOICE_NAME: &str = "Custom Voice";
const VOICE_DESCRIPTION: &str = "Custom voice model created from user recordings";

pub struct TtsService {
    recording_repo: Arc<RecordingRepository>,
    tts_repo: Arc<TtsGenerationRepository>,
    voice_repo: Arc<dyn VoiceCloneRepository>,
    /// Remote voice reused for the rest of the process lifetime
    voice_id: Mutex<Option<String>>,
}

impl TtsService {
    pub fn new(
        recording_repo: Arc<RecordingRepository>,
        tts_repo: Arc<TtsGenerationRepository>,
        voice_repo: Arc<dyn VoiceCloneRepository>,
        voice_id: Option<String>,
    ) -> Self {
        if let Some(id) = &voice_id {
            tracing::info!(voice_id = %id, "Using preconfigured custom voice");
        }

        Self {
            recording_repo,
            tts_repo,
            voice_repo,
            voice_id: Mutex::new(voice_id),
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    async fn list_generations(&self) -> Result<Vec<TtsGeneration>, TtsServiceError>;

    async fn get_generation(&self, id: u32) -> Result<TtsGeneration, TtsServiceError>;

    /// Generate speech in the user's cloned voice
    ///
    /// This operation:
    /// - Validates the text and rate parameters
    /// - Requires a configured provider and enough recorded samples
    /// - Creates the remote voice and uploads samples on first use
    /// - Synthesizes the text and stores the result
    async fn generate(
        &self,
        request: CreateTtsGenerationRequest,
    ) -> Result<TtsGeneration, TtsServiceError>;

    async fn delete_generation(&self, id: u32) -> Result<(), TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn list_generations(&self) -> Result<Vec<TtsGeneration>, TtsServiceError> {
        Ok(self.tts_repo.find_all().await)
    }

    async fn get_generation(&self, id: u32) -> Result<TtsGeneration, TtsServiceError> {
        self.tts_repo
            .find_by_id(id)
            .await
            .ok_or(TtsServiceError::NotFound)
    }

    async fn generate(
        &self,
        request: CreateTtsGenerationRequest,
    ) -> Result<TtsGeneration, TtsServiceError> {
        // 1. Validate input
        let (input_text, speed, pitch) = validate_request(&request)?;

        tracing::info!(
            provider = self.voice_repo.provider_name(),
            text_length = input_text.len(),
            speed = %speed,
            pitch = %pitch,
            "TTS generation request"
        );

        // 2. Provider must be usable
        self.voice_repo
            .ensure_configured()
            .map_err(TtsServiceError::Generation)?;

        // 3. Enough samples to clone from
        let recordings = self.recording_repo.find_all().await;
        if recordings.len() < MIN_VOICE_SAMPLES {
            return Err(TtsServiceError::Generation(format!(
                "Not enough voice samples. Please record at least {} phrases first.",
                MIN_VOICE_SAMPLES
            )));
        }

        // 4. Reuse or provision the remote voice
        let voice_id = self.resolve_voice(&recordings).await?;

        // 5. Synthesize
        let audio = self
            .voice_repo
            .synthesize(&voice_id, &input_text)
            .await
            .map_err(TtsServiceError::Generation)?;

        // 6. Store
        let duration = estimate_duration_seconds(&input_text);
        let generation = self
            .tts_repo
            .create(NewTtsGeneration {
                input_text,
                audio_data: encode_data_url("audio/mpeg", &audio),
                speed,
                pitch,
                duration,
            })
            .await;

        tracing::info!(
            generation_id = generation.id,
            voice_id = %voice_id,
            audio_size_bytes = audio.len(),
            duration_seconds = duration,
            "Speech generated"
        );

        Ok(generation)
    }

    async fn delete_generation(&self, id: u32) -> Result<(), TtsServiceError> {
        if !self.tts_repo.delete(id).await {
            return Err(TtsServiceError::NotFound);
        }
        Ok(())
    }
}

impl TtsService {
    /// The remote voice currently in use, if any
    pub async fn current_voice_id(&self) -> Option<String> {
        self.voice_id.lock().await.clone()
    }

    /// Holds the lock across provisioning so concurrent requests share one voice
    async fn resolve_voice(&self, recordings: &[Recording]) -> Result<String, TtsServiceError> {
        let mut voice_id = self.voice_id.lock().await;

        if let Some(id) = voice_id.as_ref() {
            tracing::info!(voice_id = %id, "Using existing voice model");
            return Ok(id.clone());
        }

        tracing::info!("No existing voice model found, creating a new one");
        let id = self.provision_voice(recordings).await?;
        *voice_id = Some(id.clone());
        tracing::info!(voice_id = %id, "Voice model ID stored for future use");

        Ok(id)
    }

    async fn provision_voice(&self, recordings: &[Recording]) -> Result<String, TtsServiceError> {
        // Upload in recording order
        let mut ordered: Vec<&Recording> = recordings.iter().collect();
        ordered.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let (seed, rest) = ordered
            .split_first()
            .ok_or_else(|| TtsServiceError::Generation("No voice samples available".to_string()))?;

        let seed_sample = to_sample(seed).map_err(|e| {
            TtsServiceError::Generation(format!(
                "Recording {} cannot be used as a voice sample: {}",
                seed.id, e
            ))
        })?;

        let voice_id = self
            .voice_repo
            .create_voice(VOICE_NAME, VOICE_DESCRIPTION, &seed_sample)
            .await
            .map_err(TtsServiceError::Generation)?;

        tracing::info!(
            voice_id = %voice_id,
            sample_count = rest.len(),
            "Voice created, adding remaining samples"
        );

        let mut uploaded = 1;
        let mut failed = 0;
        for recording in rest {
            let result = match to_sample(recording) {
                Ok(sample) => {
                    self.voice_repo
                        .add_sample(&voice_id, VOICE_NAME, &sample)
                        .await
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {
                    uploaded += 1;
                    tracing::debug!(recording_id = recording.id, "Sample added to voice model");
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        recording_id = recording.id,
                        error = %e,
                        "Failed to add sample to voice model"
                    );
                }
            }
        }

        tracing::info!(
            voice_id = %voice_id,
            uploaded = uploaded,
            failed = failed,
            "Finished adding voice samples"
        );

        Ok(voice_id)
    }
}

fn to_sample(recording: &Recording) -> Result<VoiceSample, String> {
    let (mime_type, bytes) = decode_data_url(&recording.audio_data).map_err(|e| e.to_string())?;
    Ok(VoiceSample {
        recording_id: recording.id,
        mime_type,
        bytes,
    })
}

fn validate_request(
    request: &CreateTtsGenerationRequest,
) -> Result<(String, String, String), TtsServiceError> {
    let mut errors = Vec::new();

    let input_text = request.input_text.trim().to_string();
    if input_text.is_empty() {
        errors.push(FieldError::new("inputText", "Text cannot be empty"));
    } else if input_text.chars().count() > MAX_INPUT_LENGTH {
        errors.push(FieldError::new(
            "inputText",
            format!("Text must be {} characters or less", MAX_INPUT_LENGTH),
        ));
    }

    let speed = validate_rate("speed", request.speed.as_deref(), &mut errors);
    let pitch = validate_rate("pitch", request.pitch.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(TtsServiceError::Invalid(errors));
    }

    Ok((input_text, speed, pitch))
}

fn validate_rate(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) -> String {
    let value = value.map(str::trim).unwrap_or(DEFAULT_RATE);
    match value.parse::<f32>() {
        Ok(rate) if (MIN_RATE..=MAX_RATE).contains(&rate) => {}
        _ => errors.push(FieldError::new(
            field,
            format!("Must be a number between {} and {}", MIN_RATE, MAX_RATE),
        )),
    }
    value.to_string()
}

pub fn estimate_duration_seconds(text: &str) -> u32 {
    (text.chars().count() / CHARACTERS_PER_SECOND) as u32
}
