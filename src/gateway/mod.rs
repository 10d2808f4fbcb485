//! Gateway access for the generation client
//!
//! The mobile side never talks to the provider directly; it submits prompts
//! to the Prediction Gateway and polls it for job status.

pub mod client;
pub mod mock;

pub use client::GatewayClient;
pub use mock::MockGatewayClient;

use crate::models::Prediction;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GatewayService: Send + Sync {
    async fn submit(&self, prompt: &str) -> Result<Prediction>;
    async fn status(&self, id: &str) -> Result<Prediction>;
}
