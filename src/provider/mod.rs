//! Prediction provider integration
//!
//! The gateway relays prompts to an external text-to-image prediction API
//! and reads job status back. Each prediction is an asynchronous job tracked
//! by an opaque id.

pub mod mock;
pub mod replicate;

pub use mock::MockPredictionClient;
pub use replicate::ReplicateClient;

use crate::models::Prediction;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn create_prediction(&self, prompt: &str) -> Result<Prediction>;
    async fn get_prediction(&self, id: &str) -> Result<Prediction>;
}
