use crate::model::SessionId;
use crate::storage::{SessionStore, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local session store. Slots live as long as the store value.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slots: Mutex<HashMap<SessionId, HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions holding at least one slot.
    pub fn session_count(&self) -> usize {
        self.slots.lock().map(|slots| slots.len()).unwrap_or(0)
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, HashMap<String, String>>>, StorageError>
    {
        self.slots
            .lock()
            .map_err(|_| StorageError::Io(std::io::Error::other("session store lock poisoned")))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session: &SessionId, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.lock()?;
        Ok(slots.get(session).and_then(|s| s.get(key)).cloned())
    }

    async fn set(&self, session: &SessionId, key: &str, value: String) -> Result<(), StorageError> {
        let mut slots = self.lock()?;
        slots
            .entry(session.clone())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, session: &SessionId, key: &str) -> Result<(), StorageError> {
        let mut slots = self.lock()?;
        if let Some(session_slots) = slots.get_mut(session) {
            session_slots.remove(key);
            if session_slots.is_empty() {
                slots.remove(session);
            }
        }
        Ok(())
    }

    async fn end_session(&self, session: &SessionId) -> Result<(), StorageError> {
        self.lock()?.remove(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slots_are_scoped_per_session() {
        let store = MemorySessionStore::new();
        let a = SessionId::from("a");
        let b = SessionId::from("b");

        store.set(&a, "cart", "[]".into()).await.unwrap();
        assert_eq!(store.get(&a, "cart").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get(&b, "cart").await.unwrap(), None);

        store.set(&b, "cart", "[1]".into()).await.unwrap();
        assert_eq!(store.session_count(), 2);

        store.end_session(&a).await.unwrap();
        assert_eq!(store.get(&a, "cart").await.unwrap(), None);
        assert_eq!(store.get(&b, "cart").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_remove_drops_empty_session() {
        let store = MemorySessionStore::new();
        let a = SessionId::from("a");
        store.set(&a, "cart", "[]".into()).await.unwrap();
        store.remove(&a, "cart").await.unwrap();
        assert_eq!(store.session_count(), 0);
        // Removing an absent slot is fine.
        store.remove(&a, "cart").await.unwrap();
    }
}
