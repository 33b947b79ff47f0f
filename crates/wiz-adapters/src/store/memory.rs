use dashmap::DashMap;
use uuid::Uuid;

use super::SessionStore;
use crate::errors::StoreError;
use crate::session::FlowSession;

/// Store en memoria, seguro entre hilos.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<Uuid, FlowSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: Uuid) -> Result<FlowSession, StoreError> {
        self.sessions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn save(&self, session: &FlowSession) -> Result<(), StoreError> {
        self.sessions.insert(session.id, session.clone());
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.sessions.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<Uuid>, StoreError> {
        let mut ids: Vec<Uuid> = self.sessions.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete() {
        let store = InMemorySessionStore::new();
        let session = FlowSession::new("onboarding", "hash");
        store.save(&session).unwrap();
        assert_eq!(store.load(session.id).unwrap(), session);
        assert_eq!(store.list().unwrap(), vec![session.id]);
        assert!(store.delete(session.id).unwrap());
        assert!(!store.delete(session.id).unwrap());
        assert!(matches!(store.load(session.id), Err(StoreError::NotFound(id)) if id == session.id));
    }
}
