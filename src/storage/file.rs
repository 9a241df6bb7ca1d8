use crate::storage::models::SessionState;
use crate::storage::StateStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// JSON file snapshot store.
///
/// Saves write a sibling temp file first and rename it over the target,
/// so a concurrent reader never sees a half-written snapshot.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    /// Load the snapshot; a missing file is not an error, just defaults.
    async fn load(&self) -> Result<SessionState> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionState::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing snapshot {}", self.path.display()))
    }

    async fn save(&self, state: &SessionState) -> Result<()> {
        let json = serde_json::to_vec_pretty(state).context("serializing snapshot")?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json)
            .await
            .with_context(|| format!("writing {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStateStore::new(dir.path().join("state.json"));

        let state = store.load().await.expect("load");
        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStateStore::new(dir.path().join("state.json"));

        let mut state = SessionState::default();
        state.phien_hien_tai = 261045;
        state.chuoi_cau = "TXXT".to_string();
        state.du_doan = "Tài".to_string();
        state.do_tin_cay = "56%".to_string();

        store.save(&state).await.expect("save");
        let loaded = store.load().await.expect("load");
        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStateStore::new(dir.path().join("state.json"));

        let mut state = SessionState::default();
        state.phien_hien_tai = 1;
        store.save(&state).await.expect("save");

        state.phien_hien_tai = 2;
        state.chuoi_cau = "T".to_string();
        store.save(&state).await.expect("save");

        let loaded = store.load().await.expect("load");
        assert_eq!(loaded.phien_hien_tai, 2);
        assert_eq!(loaded.chuoi_cau, "T");
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, b"not json").await.expect("write");

        let store = FileStateStore::new(path);
        assert!(store.load().await.is_err());
    }
}
