pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::CreateTtsGenerationRequest;
pub use error::TtsServiceError;
pub use model::{NewTtsGeneration, TtsGeneration};
pub use service::{TtsService, TtsServiceApi};
