use super::HistoryService;
use crate::models::Logo;
use crate::{Error, Result};
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// File-backed history store. One JSON array, newest first. Assumes a single
/// logical writer; concurrent appends can lose an entry (last write wins).
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_logos(&self) -> Vec<Logo> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read history file: {}. Starting empty.", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(logos) => logos,
            Err(e) => {
                tracing::warn!("Could not parse history file: {}. Starting empty.", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl HistoryService for FileHistoryStore {
    async fn append(&self, logo: &Logo) -> Result<()> {
        let mut logos = self.read_logos();
        logos.insert(0, logo.clone());

        let json = serde_json::to_string(&logos)?;
        fs::write(&self.path, json).map_err(|e| {
            Error::Persistence(format!(
                "Failed to write history file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn load_all(&self) -> Vec<Logo> {
        self.read_logos()
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Persistence(format!(
                "Failed to clear history file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
