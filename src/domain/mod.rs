pub mod phrase;
pub mod recording;
pub mod stats;
pub mod tts;
