//! In-memory cache for active session handles.

use super::handle::ChatSessionHandle;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory cache of [`ChatSessionHandle`] instances.
///
/// This cache stores the live state of resumed sessions so repeated
/// navigation to a session does not re-fetch its history.
pub struct SessionCache {
    /// In-memory session cache
    sessions: Arc<RwLock<HashMap<String, Arc<ChatSessionHandle>>>>,
}

impl SessionCache {
    /// Creates a new empty SessionCache.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a cached handle by session ID.
    ///
    /// # Returns
    ///
    /// `Some(handle)` if the session is cached, `None` otherwise.
    pub async fn get(&self, session_id: &str) -> Option<Arc<ChatSessionHandle>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    /// Inserts a handle into the cache.
    pub async fn insert(&self, session_id: String, handle: Arc<ChatSessionHandle>) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, handle);
    }

    /// Gets the cached handle for a session, inserting an empty one if the
    /// session is not yet cached.
    pub async fn get_or_insert_empty(&self, session_id: &str) -> Arc<ChatSessionHandle> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(ChatSessionHandle::new(session_id)))
            .clone()
    }

    /// Removes a handle from the cache.
    pub async fn remove(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
    }

    /// Clears all cached sessions.
    pub async fn clear(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.clear();
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
