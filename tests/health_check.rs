//! Integration tests for the health endpoints.

use legalbot_service::config::{GoogleConfig, LegalbotConfig, ModelConfig, ServerConfig};
use legalbot_service::services::providers::mock::{MockBehavior, MockTextProvider};
use legalbot_service::services::providers::TextProvider;
use legalbot_service::startup::Application;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let config = LegalbotConfig {
        server: ServerConfig { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        model: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
        },
    };

    let provider: Arc<dyn TextProvider> = Arc::new(MockTextProvider::new(MockBehavior::Reply(
        "ok".to_string(),
    )));

    let app = Application::build(config, provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "legalbot-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
