use crate::storage::{SessionState, StateStore};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Test-only store that records every saved snapshot in memory.
#[derive(Default)]
pub struct MemoryStateStore {
    saved: Mutex<Vec<SessionState>>,
    fail_saves: bool,
}

impl MemoryStateStore {
    /// A store whose saves always fail, for persistence-error paths.
    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail_saves: true,
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<SessionState> {
        self.saved.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self) -> Result<SessionState> {
        Ok(self.last_saved().unwrap_or_default())
    }

    async fn save(&self, state: &SessionState) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("simulated write failure"));
        }
        self.saved.lock().unwrap().push(state.clone());
        Ok(())
    }
}
