use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_studio_backend::infrastructure::config::{Config, LogFormat};
use voice_studio_backend::infrastructure::http::{
    build_controllers, create_router, create_voice_repository, start_http_server,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Voice Studio Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        provider = %config.tts_provider,
        has_api_key = config.elevenlabs_api_key.is_some(),
        has_custom_voice = config.custom_voice_id.is_some(),
        development = config.is_development(),
        "Voice cloning provider configuration"
    );

    // === DEPENDENCY INJECTION SETUP ===
    let voice_repo = create_voice_repository(&config);
    let controllers = build_controllers(&config, voice_repo);
    let app = create_router(controllers);

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "voice_studio_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
