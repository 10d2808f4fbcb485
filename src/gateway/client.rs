use super::GatewayService;
use crate::models::Prediction;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Where the app expects to find its gateway. Overridable for tests.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

pub struct GatewayClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl GatewayClient {
    pub fn new() -> Self {
        Self::new_with_client(Client::new())
    }

    pub fn new_with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn parse_response(&self, response: reqwest::Response) -> Result<Prediction> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or(text);
            tracing::error!("Gateway error (status {}): {}", status, message);

            return Err(if status == StatusCode::BAD_REQUEST {
                Error::Validation(message)
            } else {
                Error::Upstream(format!("Gateway error (status {}): {}", status, message))
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse gateway response: {}\nBody: {}", e, body);
            Error::Upstream(format!("Failed to parse gateway response: {}", e))
        })
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GatewayService for GatewayClient {
    async fn submit(&self, prompt: &str) -> Result<Prediction> {
        if prompt.is_empty() {
            return Err(Error::Validation("Prompt is required".to_string()));
        }

        let response = self
            .client
            .post(format!("{}/logo/generate", self.base_url))
            .json(&GenerateBody { prompt })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach gateway: {}", e);
                e
            })?;

        self.parse_response(response).await
    }

    async fn status(&self, id: &str) -> Result<Prediction> {
        if id.trim().is_empty() {
            return Err(Error::Validation("Prediction ID is required".to_string()));
        }

        let response = self
            .client
            .get(format!("{}/logo/status/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach gateway: {}", e);
                e
            })?;

        self.parse_response(response).await
    }
}
