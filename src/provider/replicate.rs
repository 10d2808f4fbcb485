use super::PredictionService;
use crate::models::Prediction;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

const DEFAULT_BASE_URL: &str = "https://api.replicate.com";

/// Pinned SDXL logo model version.
const MODEL_VERSION: &str = "67ed00e8999fecd32035074fa0f2e9a31ee03b57a8415e6a5e2f93a242ddd8d2";

#[derive(Debug, Serialize)]
struct PredictionRequest<'a> {
    version: &'a str,
    input: PredictionInput<'a>,
}

/// Image generation parameters. Fixed; callers only supply the prompt.
#[derive(Debug, Serialize)]
struct PredictionInput<'a> {
    width: u32,
    height: u32,
    prompt: &'a str,
    refine: &'a str,
    scheduler: &'a str,
    lora_scale: f64,
    num_outputs: u32,
    guidance_scale: f64,
    apply_watermark: bool,
    high_noise_frac: f64,
    negative_prompt: &'a str,
    prompt_strength: f64,
    num_inference_steps: u32,
}

impl<'a> PredictionInput<'a> {
    fn for_prompt(prompt: &'a str) -> Self {
        Self {
            width: 1024,
            height: 1024,
            prompt,
            refine: "no_refiner",
            scheduler: "K_EULER",
            lora_scale: 0.6,
            num_outputs: 1,
            guidance_scale: 7.5,
            apply_watermark: true,
            high_noise_frac: 0.8,
            negative_prompt: "",
            prompt_strength: 0.8,
            num_inference_steps: 50,
        }
    }
}

pub struct ReplicateClient {
    client: Client,
    api_token: String,
    base_url: String,
}

impl ReplicateClient {
    pub fn new(api_token: String) -> Self {
        Self::new_with_client(api_token, Client::new())
    }

    pub fn new_with_client(api_token: String, client: Client) -> Self {
        Self {
            client,
            api_token,
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
            let error_text = response.text().await?;
            tracing::error!("Replicate API error (status {}): {}", status, error_text);
            return Err(Error::Upstream(format!(
                "Replicate API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Replicate response: {}\nBody: {}", e, body);
            Error::Upstream(format!("Failed to parse Replicate response: {}", e))
        })
    }
}

#[async_trait]
impl PredictionService for ReplicateClient {
    async fn create_prediction(&self, prompt: &str) -> Result<Prediction> {
        tracing::debug!("Creating prediction at Replicate");

        let request = PredictionRequest {
            version: MODEL_VERSION,
            input: PredictionInput::for_prompt(prompt),
        };

        let response = self
            .client
            .post(format!("{}/v1/predictions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Prefer", "wait")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Replicate: {}", e);
                e
            })?;

        self.parse_response(response).await
    }

    async fn get_prediction(&self, id: &str) -> Result<Prediction> {
        tracing::debug!("Fetching prediction {} from Replicate", id);

        let response = self
            .client
            .get(format!("{}/v1/predictions/{}", self.base_url, id))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch prediction from Replicate: {}", e);
                e
            })?;

        self.parse_response(response).await
    }
}
