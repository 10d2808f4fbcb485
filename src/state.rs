//! Application view state and its transition actions.
//!
//! The state is only ever updated by applying an [`AppAction`] through
//! [`AppState::apply`], so every consumer observes the same transitions.

use crate::models::Logo;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Newest-first list mirroring the persisted history.
    pub logos: Vec<Logo>,
    /// Asserted for the full duration of a submit-and-poll attempt.
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AppAction {
    AddLogo(Logo),
    SetLogos(Vec<Logo>),
    SetLoading(bool),
    SetError(Option<String>),
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::AddLogo(logo) => self.logos.insert(0, logo),
            AppAction::SetLogos(logos) => self.logos = logos,
            AppAction::SetLoading(loading) => self.is_loading = loading,
            AppAction::SetError(error) => self.error = error,
        }
    }
}
