use crate::model::SessionId;
use crate::storage::{SessionStore, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Session store backed by one JSON document per session under a state directory.
///
/// `<root>/<session>.json` holds an object mapping slot keys to slot values. Concurrent writers
/// of the same session are not coordinated: the last write wins.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, session: &SessionId) -> Result<PathBuf, StorageError> {
        let token = session.as_str();
        let valid = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidSession(token.to_string()));
        }
        Ok(self.root.join(format!("{token}.json")))
    }

    async fn read_slots(&self, path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Slots to start a write from. A corrupt document is replaced; any other failure aborts the
    /// write so no existing slot is lost.
    async fn slots_for_write(&self, path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_slots(path).await {
            Ok(slots) => Ok(slots),
            Err(StorageError::Serialization(e)) => {
                warn!(path = %path.display(), error = %e, "Replacing corrupt session file");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_slots(
        &self,
        path: &Path,
        slots: &BTreeMap<String, String>,
    ) -> Result<(), StorageError> {
        if slots.is_empty() {
            return remove_file_if_present(path).await;
        }
        tokio::fs::create_dir_all(&self.root).await?;
        let text = serde_json::to_string_pretty(slots)?;
        tokio::fs::write(path, text).await?;
        debug!(path = %path.display(), slots = slots.len(), "Session file written");
        Ok(())
    }
}

async fn remove_file_if_present(path: &Path) -> Result<(), StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.session_path(session)?;
        let mut slots = self.read_slots(&path).await?;
        Ok(slots.remove(key))
    }

    async fn set(&self, session: &SessionId, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.session_path(session)?;
        let mut slots = self.slots_for_write(&path).await?;
        slots.insert(key.to_string(), value);
        self.write_slots(&path, &slots).await
    }

    async fn remove(&self, session: &SessionId, key: &str) -> Result<(), StorageError> {
        let path = self.session_path(session)?;
        let mut slots = self.slots_for_write(&path).await?;
        slots.remove(key);
        self.write_slots(&path, &slots).await
    }

    async fn end_session(&self, session: &SessionId) -> Result<(), StorageError> {
        let path = self.session_path(session)?;
        remove_file_if_present(&path).await
    }
}
