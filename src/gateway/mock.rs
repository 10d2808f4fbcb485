use super::GatewayService;
use crate::models::{Prediction, PredictionStatus};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockGatewayClient {
    submit_responses: Arc<Mutex<Vec<Prediction>>>,
    status_responses: Arc<Mutex<Vec<Prediction>>>,
    submit_count: Arc<Mutex<usize>>,
    status_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockGatewayClient {
    pub fn new() -> Self {
        Self {
            submit_responses: Arc::new(Mutex::new(Vec::new())),
            status_responses: Arc::new(Mutex::new(Vec::new())),
            submit_count: Arc::new(Mutex::new(0)),
            status_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_submit_response(self, response: Prediction) -> Self {
        self.submit_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_status_response(self, response: Prediction) -> Self {
        self.status_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_submit_count(&self) -> usize {
        *self.submit_count.lock().unwrap()
    }

    pub fn get_status_count(&self) -> usize {
        *self.status_count.lock().unwrap()
    }

    /// The prompt received by the most recent submit call.
    pub fn last_submitted_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl Default for MockGatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GatewayService for MockGatewayClient {
    async fn submit(&self, prompt: &str) -> Result<Prediction> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Upstream("Mock gateway failure".to_string()));
        }

        let mut count = self.submit_count.lock().unwrap();
        *count += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let responses = self.submit_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Prediction {
                id: "mock-prediction".to_string(),
                status: PredictionStatus::Starting,
                output: None,
                error: None,
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }

    async fn status(&self, id: &str) -> Result<Prediction> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Upstream("Mock gateway failure".to_string()));
        }

        let mut count = self.status_count.lock().unwrap();
        *count += 1;

        let responses = self.status_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Prediction {
                id: id.to_string(),
                status: PredictionStatus::Succeeded,
                output: Some(vec!["https://images.example.com/logo.png".to_string()]),
                error: None,
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
