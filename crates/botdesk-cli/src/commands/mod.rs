//! Command implementations, one module per screen.

pub mod account;
pub mod agent;
pub mod dashboard;
pub mod open;

use botdesk_core::{CommandClipboard, Config, StoreAgentRepository, UserSession};
use botdesk_store::{JsonFileStore, KeyValueStore};
use std::path::Path;
use std::sync::Arc;

/// Collaborators shared by every command, all backed by one store.
pub struct Context {
    pub repo: StoreAgentRepository,
    pub session: UserSession,
    pub clipboard: CommandClipboard,
}

impl Context {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let clipboard = match &config.clipboard_command {
            Some(command) => CommandClipboard::with_command(command.clone()),
            None => CommandClipboard::new(),
        };

        Self {
            repo: StoreAgentRepository::new(store.clone()),
            session: UserSession::new(store),
            clipboard,
        }
    }
}

/// Pick the storage file: `--storage`, then the config file, then the default.
pub fn open_store(storage: Option<&Path>, config: &Config) -> Arc<dyn KeyValueStore> {
    let store = match storage.or(config.storage_path.as_deref()) {
        Some(path) => JsonFileStore::with_path(path),
        None => JsonFileStore::new(),
    };
    tracing::debug!(path = %store.path().display(), "using storage file");
    Arc::new(store)
}
