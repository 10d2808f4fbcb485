use super::HistoryService;
use crate::models::Logo;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockHistoryStore {
    logos: Arc<Mutex<Vec<Logo>>>,
    append_count: Arc<Mutex<usize>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockHistoryStore {
    pub fn new() -> Self {
        Self {
            logos: Arc::new(Mutex::new(Vec::new())),
            append_count: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_logo(self, logo: Logo) -> Self {
        self.logos.lock().unwrap().push(logo);
        self
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_append_count(&self) -> usize {
        *self.append_count.lock().unwrap()
    }

    pub fn get_logos(&self) -> Vec<Logo> {
        self.logos.lock().unwrap().clone()
    }
}

impl Default for MockHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryService for MockHistoryStore {
    async fn append(&self, logo: &Logo) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Persistence("Mock storage failure".to_string()));
        }

        let mut count = self.append_count.lock().unwrap();
        *count += 1;

        self.logos.lock().unwrap().insert(0, logo.clone());
        Ok(())
    }

    async fn load_all(&self) -> Vec<Logo> {
        self.logos.lock().unwrap().clone()
    }

    async fn clear(&self) -> Result<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(Error::Persistence("Mock storage failure".to_string()));
        }

        self.logos.lock().unwrap().clear();
        Ok(())
    }
}
