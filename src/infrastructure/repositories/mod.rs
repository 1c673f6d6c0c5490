pub mod elevenlabs_voice_clone_repository;
pub mod mock_voice_clone_repository;
pub mod phrase_repository;
pub mod recording_repository;
pub mod tts_generation_repository;
pub mod voice_clone_repository;

pub use elevenlabs_voice_clone_repository::ElevenLabsVoiceCloneRepository;
pub use mock_voice_clone_repository::MockVoiceCloneRepository;
pub use phrase_repository::PhraseRepository;
pub use recording_repository::RecordingRepository;
pub use tts_generation_repository::TtsGenerationRepository;
pub use voice_clone_repository::VoiceCloneRepository;
