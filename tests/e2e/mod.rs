// End-to-end tests for the Voice Studio Backend API
//
// Each test boots the real router on an ephemeral port with a fresh
// in-memory store. The voice cloning provider is either the built-in mock
// or an ElevenLabs client pointed at a wiremock server.

mod test_health;
mod test_recordings;
mod test_stats;
