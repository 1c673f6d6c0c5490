use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use std::sync::OnceLock;

/// A decoded recording ready to upload to the voice cloning provider
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSample {
    pub recording_id: u32,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl VoiceSample {
    /// Upload file name, e.g. `sample_7.webm`
    pub fn file_name(&self) -> String {
        format!(
            "sample_{}.{}",
            self.recording_id,
            file_extension(&self.mime_type)
        )
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AudioDataError {
    #[error("audio data must be a base64 data URL (data:<mime>;base64,<payload>)")]
    NotADataUrl,
    #[error("audio data payload is empty")]
    EmptyPayload,
    #[error("audio data payload is not valid base64: {0}")]
    InvalidBase64(String),
}

fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Browsers emit optional parameters such as `;codecs=opus` before `;base64`
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:([\w.+-]+/[\w.+-]+)((?:;[\w.+-]+=[\w.+-]+)*);base64,(.*)$")
            .expect("data URL pattern is valid")
    })
}

/// Split a data URL into its mime type and decoded bytes
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), AudioDataError> {
    let captures = data_url_pattern()
        .captures(data_url.trim())
        .ok_or(AudioDataError::NotADataUrl)?;

    let mime_type = captures[1].to_lowercase();
    let payload = &captures[3];
    if payload.is_empty() {
        return Err(AudioDataError::EmptyPayload);
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| AudioDataError::InvalidBase64(e.to_string()))?;

    Ok((mime_type, bytes))
}

/// Encode raw audio as a data URL
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

pub fn file_extension(mime_type: &str) -> &'static str {
    match mime_type {
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/wav" | "audio/wave" | "audio/x-wav" => "wav",
        "audio/webm" => "webm",
        "audio/ogg" => "ogg",
        "audio/mp4" | "audio/x-m4a" => "m4a",
        "audio/flac" => "flac",
        _ => "bin",
    }
}
