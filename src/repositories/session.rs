use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::session::Session;

/// The token → session map.
#[derive(Clone, Default)]
pub struct SessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRepository {
    /// Creates a new, empty `SessionRepository`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a session under its token.
    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
    }

    /// Looks a session up by token.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Removes a session, returning it if it was present.
    pub async fn remove(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token)
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
