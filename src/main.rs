use legalbot_service::config::LegalbotConfig;
use legalbot_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use legalbot_service::services::providers::TextProvider;
use legalbot_service::startup::Application;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("info");

    let config = LegalbotConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let gemini_config = GeminiConfig {
        api_key: config.google.api_key.clone(),
        model: config.model.text_model.clone(),
    };
    let provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

    tracing::info!(
        model = %config.model.text_model,
        "Initialized Gemini text provider"
    );

    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("legalbot-service listening on port {}", app.port());

    app.run_until_stopped().await
}
