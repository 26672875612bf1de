//! Signed-in user display name.

use crate::error::CoreError;
use botdesk_store::KeyValueStore;
use std::sync::Arc;

/// Store key holding the display name, stored as a raw string.
pub const SESSION_KEY: &str = "demoUserName";

/// The current user's display name. Set at signup, cleared at logout.
pub struct UserSession {
    store: Arc<dyn KeyValueStore>,
}

impl UserSession {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored name, or an empty string when nobody signed up.
    pub fn display_name(&self) -> String {
        match self.store.get(SESSION_KEY) {
            Ok(name) => name.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read session; treating as signed out");
                String::new()
            }
        }
    }

    pub fn set_display_name(&self, name: &str) -> Result<(), CoreError> {
        self.store.set(SESSION_KEY, name)?;
        tracing::debug!(name, "session started");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        self.store.remove(SESSION_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdesk_store::MemoryStore;

    #[test]
    fn test_session_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let session = UserSession::new(store.clone());
        assert_eq!(session.display_name(), "");

        session.set_display_name("alice").unwrap();
        assert_eq!(session.display_name(), "alice");
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("alice"));

        session.clear().unwrap();
        assert_eq!(session.display_name(), "");
    }

    #[test]
    fn test_malformed_looking_value_is_returned_verbatim() {
        let store = Arc::new(MemoryStore::new());
        store.set(SESSION_KEY, "{\"not\": \"json-decoded\"").unwrap();
        let session = UserSession::new(store);
        assert_eq!(session.display_name(), "{\"not\": \"json-decoded\"");
    }
}
