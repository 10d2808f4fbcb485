use super::PredictionService;
use crate::models::{Prediction, PredictionStatus};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockPredictionClient {
    create_responses: Arc<Mutex<Vec<Prediction>>>,
    status_responses: Arc<Mutex<Vec<Prediction>>>,
    create_count: Arc<Mutex<usize>>,
    status_count: Arc<Mutex<usize>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self {
            create_responses: Arc::new(Mutex::new(Vec::new())),
            status_responses: Arc::new(Mutex::new(Vec::new())),
            create_count: Arc::new(Mutex::new(0)),
            status_count: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_create_response(self, response: Prediction) -> Self {
        self.create_responses.lock().unwrap().push(response);
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

    pub fn get_create_count(&self) -> usize {
        *self.create_count.lock().unwrap()
    }

    pub fn get_status_count(&self) -> usize {
        *self.status_count.lock().unwrap()
    }
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionService for MockPredictionClient {
    async fn create_prediction(&self, _prompt: &str) -> Result<Prediction> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Upstream("Mock provider failure".to_string()));
        }

        let mut count = self.create_count.lock().unwrap();
        *count += 1;

        let responses = self.create_responses.lock().unwrap();
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

    async fn get_prediction(&self, id: &str) -> Result<Prediction> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Upstream("Mock provider failure".to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_responses() {
        let client = MockPredictionClient::new();

        let created = client.create_prediction("Acme Coffee").await.unwrap();
        assert_eq!(created.id, "mock-prediction");
        assert_eq!(created.status, PredictionStatus::Starting);

        let status = client.get_prediction(&created.id).await.unwrap();
        assert_eq!(status.status, PredictionStatus::Succeeded);
        assert!(status.first_output().is_some());
    }

    #[tokio::test]
    async fn test_mock_queued_status_responses_cycle() {
        let client = MockPredictionClient::new()
            .with_status_response(Prediction {
                id: "abc123".to_string(),
                status: PredictionStatus::Processing,
                output: None,
                error: None,
            })
            .with_status_response(Prediction {
                id: "abc123".to_string(),
                status: PredictionStatus::Succeeded,
                output: Some(vec!["https://img/abc.png".to_string()]),
                error: None,
            });

        assert_eq!(
            client.get_prediction("abc123").await.unwrap().status,
            PredictionStatus::Processing
        );
        assert_eq!(
            client.get_prediction("abc123").await.unwrap().status,
            PredictionStatus::Succeeded
        );
        assert_eq!(client.get_status_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_failure_mode() {
        let client = MockPredictionClient::new().with_failure(true);

        let err = client.create_prediction("Acme Coffee").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(client.get_create_count(), 0);
    }
}
