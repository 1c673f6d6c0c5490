use super::voice_clone_repository::VoiceCloneRepository;
use crate::domain::recording::audio::VoiceSample;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const XI_API_KEY_HEADER: &str = "xi-api-key";

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AddVoiceResponse {
    voice_id: String,
}

/// ElevenLabs implementation of the voice cloning repository
pub struct ElevenLabsVoiceCloneRepository {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsVoiceCloneRepository {
    pub fn new(api_key: Option<String>, base_url: String, model_id: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
            voice_settings: VoiceSettings::default(),
        }
    }

    fn api_key(&self) -> Result<&str, String> {
        self.api_key
            .as_deref()
            .ok_or_else(|| "ElevenLabs API key is not configured".to_string())
    }

    fn voice_url(&self, voice_id: &str, suffix: &str) -> String {
        format!(
            "{}/v1/voices/{}/{}",
            self.base_url,
            urlencoding::encode(voice_id),
            suffix
        )
    }

    fn sample_part(sample: &VoiceSample) -> Result<Part, String> {
        Part::bytes(sample.bytes.clone())
            .file_name(sample.file_name())
            .mime_str(&sample.mime_type)
            .map_err(|e| format!("Invalid sample mime type '{}': {}", sample.mime_type, e))
    }

    async fn send_form(&self, url: &str, form: Form) -> Result<reqwest::Response, String> {
        self.http_client
            .post(url)
            .header(XI_API_KEY_HEADER, self.api_key()?)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("ElevenLabs request failed: {}", e))
    }
}

/// Pull a readable reason out of an ElevenLabs error body.
/// `detail` is either a string or an object carrying `message`.
fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| match json.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Object(obj)) => obj
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            _ => None,
        });

    detail.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}

#[async_trait]
impl VoiceCloneRepository for ElevenLabsVoiceCloneRepository {
    fn provider_name(&self) -> &'static str {
        "elevenlabs"
    }

    fn ensure_configured(&self) -> Result<(), String> {
        self.api_key().map(|_| ())
    }

    async fn create_voice(
        &self,
        name: &str,
        description: &str,
        seed: &VoiceSample,
    ) -> Result<String, String> {
        tracing::info!(
            voice_name = name,
            seed_recording_id = seed.recording_id,
            seed_size_bytes = seed.bytes.len(),
            "Creating ElevenLabs voice"
        );

        let form = Form::new()
            .text("name", name.to_string())
            .text("description", description.to_string())
            .part("files", Self::sample_part(seed)?);

        let response = self
            .send_form(&format!("{}/v1/voices/add", self.base_url), form)
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Failed to create ElevenLabs voice");
            return Err(format!(
                "Failed to create custom voice model: {}",
                error_detail(status, &body)
            ));
        }

        let created: AddVoiceResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse ElevenLabs voice response: {}", e))?;

        Ok(created.voice_id)
    }

    async fn add_sample(
        &self,
        voice_id: &str,
        voice_name: &str,
        sample: &VoiceSample,
    ) -> Result<(), String> {
        let form = Form::new()
            .text("name", voice_name.to_string())
            .part("files", Self::sample_part(sample)?);

        let response = self.send_form(&self.voice_url(voice_id, "edit"), form).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!(
                "ElevenLabs rejected sample {}: {} {}",
                sample.recording_id,
                status.as_u16(),
                error_detail(status, &body)
            ));
        }

        Ok(())
    }

    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.base_url,
            urlencoding::encode(voice_id)
        );

        let request = SynthesisRequest {
            text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };

        let response = self
            .http_client
            .post(&url)
            .header(XI_API_KEY_HEADER, self.api_key()?)
            .header("Accept", "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("ElevenLabs request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                voice_id = voice_id,
                model = %self.model_id,
                "ElevenLabs synthesis failed"
            );
            return Err(format!(
                "ElevenLabs API error: {} {}",
                status.as_u16(),
                error_detail(status, &body)
            ));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read ElevenLabs audio: {}", e))?
            .to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "elevenlabs",
            model = %self.model_id,
            voice_id = voice_id,
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}
