//! Generation client orchestration: the submit-and-poll workflow.

use crate::gateway::{GatewayClient, GatewayService};
use crate::history::{FileHistoryStore, HistoryService};
use crate::models::{GenerationRequest, Logo, PredictionStatus};
use crate::state::{AppAction, AppState};
use crate::styles;
use crate::{Error, Result};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};

/// Delay between status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Poll ceiling per attempt, about sixty seconds of wall time.
const MAX_POLL_ATTEMPTS: u32 = 30;

/// Coordinates prompt submission, status polling, and history persistence
/// for one user session. Attempts run independently; nothing serializes
/// concurrent generations.
pub struct App {
    gateway: Box<dyn GatewayService>,
    history: Box<dyn HistoryService>,
    state: Mutex<AppState>,
    poll_interval: Duration,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub gateway: Box<dyn GatewayService>,
    pub history: Box<dyn HistoryService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            gateway: services.gateway,
            history: services.history,
            state: Mutex::new(AppState::default()),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Build an app against the default gateway and a history file.
    pub fn new(history_path: impl Into<PathBuf>) -> Self {
        Self::with_services(AppServices {
            gateway: Box::new(GatewayClient::new()),
            history: Box::new(FileHistoryStore::new(history_path)),
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Populate state from persisted history. Called once at startup; a
    /// missing or unreadable blob simply yields an empty list.
    pub async fn load_history(&self) {
        let logos = self.history.load_all().await;
        info!("Loaded {} logos from history", logos.len());
        self.dispatch(AppAction::SetLogos(logos));
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    fn dispatch(&self, action: AppAction) {
        self.state.lock().unwrap().apply(action);
    }

    /// Run one generation attempt to a terminal state. The loading flag
    /// covers the whole attempt; the error field is cleared on entry and set
    /// on any failure.
    pub async fn generate_logo(&self, request: GenerationRequest) -> Result<Logo> {
        self.dispatch(AppAction::SetLoading(true));
        self.dispatch(AppAction::SetError(None));

        match self.run_attempt(&request).await {
            Ok(logo) => {
                self.dispatch(AppAction::AddLogo(logo.clone()));
                self.dispatch(AppAction::SetLoading(false));
                Ok(logo)
            }
            Err(e) => {
                self.dispatch(AppAction::SetError(Some(e.to_string())));
                self.dispatch(AppAction::SetLoading(false));
                Err(e)
            }
        }
    }

    async fn run_attempt(&self, request: &GenerationRequest) -> Result<Logo> {
        if request.prompt.trim().is_empty() {
            return Err(Error::Validation("Prompt is required".to_string()));
        }

        let full_prompt = styles::augment_prompt(&request.prompt, request.style);
        let prediction = self.gateway.submit(&full_prompt).await?;
        info!("Submitted prediction {}", prediction.id);

        let image_url = self.poll_for_result(&prediction.id).await?;

        // The persisted prompt is the user's text, not the augmented one.
        let logo = Logo::new(&request.prompt, image_url, request.style);
        self.history.append(&logo).await?;
        info!("Persisted logo {}", logo.id);

        Ok(logo)
    }

    async fn poll_for_result(&self, id: &str) -> Result<String> {
        for attempt in 1..=MAX_POLL_ATTEMPTS {
            let prediction = self.gateway.status(id).await?;

            match prediction.status {
                PredictionStatus::Succeeded => {
                    if let Some(url) = prediction.first_output() {
                        info!("Prediction {} succeeded after {} polls", id, attempt);
                        return Ok(url.to_string());
                    }
                    // Succeeded with no output is not terminal.
                    warn!("Prediction {} succeeded without output, polling on", id);
                }
                PredictionStatus::Failed => {
                    return Err(Error::Generation("Logo generation failed".to_string()));
                }
                PredictionStatus::Starting | PredictionStatus::Processing => {}
            }

            tokio::time::sleep(self.poll_interval).await;
        }

        Err(Error::Timeout(
            "Timeout waiting for logo generation".to_string(),
        ))
    }

    /// Drop all persisted history and reset the in-memory list.
    pub async fn clear_history(&self) -> Result<()> {
        self.history.clear().await?;
        self.dispatch(AppAction::SetLogos(Vec::new()));
        Ok(())
    }
}
