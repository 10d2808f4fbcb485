//! Local history persistence
//!
//! Completed generations are kept as a single JSON blob, newest first. Reads
//! never fail the caller; writes do.

pub mod file;
pub mod mock;

pub use file::FileHistoryStore;
pub use mock::MockHistoryStore;

use crate::models::Logo;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Prepend a logo to the persisted list. Write failures surface.
    async fn append(&self, logo: &Logo) -> Result<()>;

    /// The persisted list, or empty when nothing is stored or the stored
    /// value is unparseable. Never blocks startup on a bad blob.
    async fn load_all(&self) -> Vec<Logo>;

    /// Remove all persisted history. Irreversible.
    async fn clear(&self) -> Result<()>;
}
