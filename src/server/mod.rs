//! Prediction Gateway HTTP surface
//!
//! A stateless proxy in front of the prediction provider: it validates the
//! caller's input, attaches the provider credential, and relays the
//! provider's envelope back unchanged. No retries, no local state.

pub mod error;

pub use error::ApiError;

use crate::models::Prediction;
use crate::provider::PredictionService;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<dyn PredictionService>,
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/logo/generate", post(generate_logo))
        .route("/api/logo/status/{id}", get(check_logo_status))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct GenerateLogoRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[axum::debug_handler]
async fn generate_logo(
    State(state): State<GatewayState>,
    Json(body): Json<GenerateLogoRequest>,
) -> Result<Json<Prediction>, ApiError> {
    let prompt = body.prompt.as_deref().unwrap_or("");
    if prompt.is_empty() {
        return Err(ApiError::BadRequest("Prompt is required".to_string()));
    }

    match state.provider.create_prediction(prompt).await {
        Ok(prediction) => Ok(Json(prediction)),
        Err(e) => {
            tracing::error!("Error generating logo: {}", e);
            Err(ApiError::Upstream("Failed to generate logo".to_string()))
        }
    }
}

#[axum::debug_handler]
async fn check_logo_status(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<Prediction>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("Prediction ID is required".to_string()));
    }

    match state.provider.get_prediction(&id).await {
        Ok(prediction) => Ok(Json(prediction)),
        Err(e) => {
            tracing::error!("Error checking logo status: {}", e);
            Err(ApiError::Upstream("Failed to check logo status".to_string()))
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictionStatus;
    use crate::provider::MockPredictionClient;

    async fn spawn_gateway(provider: MockPredictionClient) -> String {
        let app = router(GatewayState {
            provider: Arc::new(provider),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_generate_relays_provider_envelope() {
        let provider = MockPredictionClient::new();
        let probe = provider.clone();
        let base = spawn_gateway(provider).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/logo/generate", base))
            .json(&serde_json::json!({ "prompt": "Acme Coffee" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let prediction: Prediction = response.json().await.unwrap();
        assert_eq!(prediction.id, "mock-prediction");
        assert_eq!(prediction.status, PredictionStatus::Starting);
        assert_eq!(probe.get_create_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_prompt() {
        let provider = MockPredictionClient::new();
        let probe = provider.clone();
        let base = spawn_gateway(provider).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/logo/generate", base))
            .json(&serde_json::json!({}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Prompt is required");
        assert_eq!(probe.get_create_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let provider = MockPredictionClient::new();
        let probe = provider.clone();
        let base = spawn_gateway(provider).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/logo/generate", base))
            .json(&serde_json::json!({ "prompt": "" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(probe.get_create_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_maps_provider_failure_to_500() {
        let base = spawn_gateway(MockPredictionClient::new().with_failure(true)).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/logo/generate", base))
            .json(&serde_json::json!({ "prompt": "Acme Coffee" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Failed to generate logo");
    }

    #[tokio::test]
    async fn test_status_relays_provider_envelope() {
        let provider = MockPredictionClient::new();
        let probe = provider.clone();
        let base = spawn_gateway(provider).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/logo/status/abc123", base))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let prediction: Prediction = response.json().await.unwrap();
        assert_eq!(prediction.id, "abc123");
        assert_eq!(prediction.status, PredictionStatus::Succeeded);
        assert_eq!(probe.get_status_count(), 1);
    }

    #[tokio::test]
    async fn test_status_maps_provider_failure_to_500() {
        let base = spawn_gateway(MockPredictionClient::new().with_failure(true)).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/logo/status/abc123", base))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Failed to check logo status");
    }

    #[tokio::test]
    async fn test_status_rejects_blank_id() {
        let base = spawn_gateway(MockPredictionClient::new()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/api/logo/status/%20", base))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Prediction ID is required");
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_gateway(MockPredictionClient::new()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/health", base))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Server is running");
    }
}
