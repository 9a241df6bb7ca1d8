pub mod file;
#[cfg(test)]
pub mod memory;
pub mod models;

use anyhow::Result;
use async_trait::async_trait;

pub use file::FileStateStore;
pub use models::SessionState;

/// Durable snapshot of the session state. Loaded once at startup,
/// overwritten after every processed round.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<SessionState>;
    async fn save(&self, state: &SessionState) -> Result<()>;
}
