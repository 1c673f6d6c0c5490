use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    health, phrases::PhraseController, recordings::RecordingController, stats::StatsController,
    tts_generations::TtsController,
};
use crate::domain::{
    phrase::PhraseService,
    recording::{RecordingService, MAX_RECORDING_BODY_BYTES},
    stats::StatsService,
    tts::TtsService,
};
use crate::infrastructure::config::{Config, TtsProvider};
use crate::infrastructure::middleware::{make_request_span, request_id_middleware};
use crate::infrastructure::repositories::{
    ElevenLabsVoiceCloneRepository, MockVoiceCloneRepository, PhraseRepository,
    RecordingRepository, TtsGenerationRepository, VoiceCloneRepository,
};
use crate::infrastructure::store::MemoryStore;

/// Controllers plus the provider handle used by the readiness probe
pub struct AppControllers {
    pub phrase_controller: Arc<PhraseController>,
    pub recording_controller: Arc<RecordingController>,
    pub tts_controller: Arc<TtsController>,
    pub stats_controller: Arc<StatsController>,
    pub voice_repo: Arc<dyn VoiceCloneRepository>,
}

/// Pick the voice cloning provider named in the configuration
pub fn create_voice_repository(config: &Config) -> Arc<dyn VoiceCloneRepository> {
    match config.tts_provider {
        TtsProvider::ElevenLabs => {
            if config.elevenlabs_api_key.is_none() {
                tracing::warn!("ELEVENLABS_API_KEY not set; speech generation requests will fail");
            }
            Arc::new(ElevenLabsVoiceCloneRepository::new(
                config.elevenlabs_api_key.clone(),
                config.elevenlabs_base_url.clone(),
                config.elevenlabs_model_id.clone(),
            ))
        }
        TtsProvider::Mock => {
            tracing::warn!("Using mock voice cloning provider");
            Arc::new(MockVoiceCloneRepository::new())
        }
    }
}

/// Wire repositories, services and controllers over a fresh store
pub fn build_controllers(config: &Config, voice_repo: Arc<dyn VoiceCloneRepository>) -> AppControllers {
    // 1. Store and repositories
    let store = Arc::new(if config.seed_default_phrases {
        MemoryStore::with_default_phrases()
    } else {
        MemoryStore::new()
    });
    let phrase_repo = Arc::new(PhraseRepository::new(store.clone()));
    let recording_repo = Arc::new(RecordingRepository::new(store.clone()));
    let tts_repo = Arc::new(TtsGenerationRepository::new(store));

    // 2. Services
    let phrase_service = Arc::new(PhraseService::new(phrase_repo.clone(), recording_repo.clone()));
    let recording_service = Arc::new(RecordingService::new(recording_repo.clone()));
    let stats_service = Arc::new(StatsService::new(phrase_repo, recording_repo.clone()));
    let tts_service = Arc::new(TtsService::new(
        recording_repo,
        tts_repo,
        voice_repo.clone(),
        config.custom_voice_id.clone(),
    ));

    // 3. Controllers
    AppControllers {
        phrase_controller: Arc::new(PhraseController::new(phrase_service)),
        recording_controller: Arc::new(RecordingController::new(recording_service)),
        tts_controller: Arc::new(TtsController::new(tts_service)),
        stats_controller: Arc::new(StatsController::new(stats_service)),
        voice_repo,
    }
}

pub fn create_router(controllers: AppControllers) -> Router {
    let phrase_routes = Router::new()
        .route(
            "/api/phrases",
            get(PhraseController::list_phrases).post(PhraseController::create_phrase),
        )
        .route(
            "/api/phrases/:id",
            get(PhraseController::get_phrase)
                .patch(PhraseController::update_phrase)
                .delete(PhraseController::delete_phrase),
        )
        .route(
            "/api/phrases/:id/recordings",
            get(PhraseController::list_phrase_recordings),
        )
        .with_state(controllers.phrase_controller);

    let recording_routes = Router::new()
        .route(
            "/api/recordings",
            get(RecordingController::list_recordings).post(RecordingController::create_recording),
        )
        .route(
            "/api/recordings/:id",
            get(RecordingController::get_recording).delete(RecordingController::delete_recording),
        )
        // Recordings arrive inline as base64 data URLs
        .layer(DefaultBodyLimit::max(MAX_RECORDING_BODY_BYTES))
        .with_state(controllers.recording_controller);

    let tts_routes = Router::new()
        .route(
            "/api/tts-generations",
            get(TtsController::list_generations).post(TtsController::create_generation),
        )
        .route(
            "/api/tts-generations/:id",
            get(TtsController::get_generation).delete(TtsController::delete_generation),
        )
        .with_state(controllers.tts_controller);

    let stats_routes = Router::new()
        .route("/api/stats", get(StatsController::get_stats))
        .with_state(controllers.stats_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(controllers.voice_repo)
        .merge(phrase_routes)
        .merge(recording_routes)
        .merge(tts_routes)
        .merge(stats_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
