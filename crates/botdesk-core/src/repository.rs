//! Agent persistence over a key-value store.
//!
//! The whole collection lives under a single key as one JSON array. Array
//! order is display order: creates append, edits replace in place and
//! deletes filter by id. Every mutation rewrites the full array, so
//! concurrent writers are last-writer-wins.

use crate::agent::{Agent, AgentDraft, Clock, SystemClock};
use crate::error::CoreError;
use botdesk_store::KeyValueStore;
use std::sync::Arc;

/// Store key holding the serialized agent collection.
pub const AGENTS_KEY: &str = "agents";

/// Typed CRUD over the agent collection.
pub trait AgentRepository: Send + Sync {
    /// All agents in stored order. Absent or unreadable data reads as empty.
    fn list_all(&self) -> Vec<Agent>;

    /// Look up a single agent.
    fn get_by_id(&self, id: &str) -> Option<Agent> {
        self.list_all().into_iter().find(|agent| agent.id == id)
    }

    /// Update the agent named by `existing_id` from `draft`, or create a new
    /// one when no id is given or it matches nothing.
    fn upsert(&self, draft: &AgentDraft, existing_id: Option<&str>) -> Result<Agent, CoreError>;

    /// Delete by id and return the remaining collection. Unknown ids are a no-op.
    fn remove(&self, id: &str) -> Result<Vec<Agent>, CoreError>;
}

/// [`AgentRepository`] backed by a [`KeyValueStore`].
pub struct StoreAgentRepository {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl StoreAgentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create with a custom clock (for testing).
    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    fn save(&self, agents: &[Agent]) -> Result<(), CoreError> {
        let content = serde_json::to_string(agents)?;
        self.store.set(AGENTS_KEY, &content)?;
        tracing::debug!(count = agents.len(), "agent collection written");
        Ok(())
    }

    fn fresh_id(agents: &[Agent]) -> String {
        loop {
            let id = ulid::Ulid::new().to_string();
            if !agents.iter().any(|agent| agent.id == id) {
                return id;
            }
        }
    }
}

impl AgentRepository for StoreAgentRepository {
    fn list_all(&self) -> Vec<Agent> {
        let content = match self.store.get(AGENTS_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read agents; treating as empty");
                return Vec::new();
            }
        };

        // JSON `null` is what an unset browser slot decodes to.
        match serde_json::from_str::<Option<Vec<Agent>>>(&content) {
            Ok(agents) => agents.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "stored agents are malformed; treating as empty");
                Vec::new()
            }
        }
    }

    fn upsert(&self, draft: &AgentDraft, existing_id: Option<&str>) -> Result<Agent, CoreError> {
        let mut agents = self.list_all();
        let position = existing_id.and_then(|id| agents.iter().position(|agent| agent.id == id));

        let agent = match position {
            Some(index) => {
                let existing = &agents[index];
                let updated = Agent {
                    id: existing.id.clone(),
                    name: draft.name.clone(),
                    kind: draft.kind,
                    color: draft.color.clone(),
                    description: draft.description.clone(),
                    documents: draft.persisted_documents(),
                    created_at: existing.created_at,
                };
                agents[index] = updated.clone();
                tracing::info!(id = %updated.id, name = %updated.name, "agent updated");
                updated
            }
            None => {
                if let Some(id) = existing_id {
                    tracing::debug!(id, "no agent to update; creating a new one");
                }
                let created = Agent {
                    id: Self::fresh_id(&agents),
                    name: draft.name.clone(),
                    kind: draft.kind,
                    color: draft.color.clone(),
                    description: draft.description.clone(),
                    documents: draft.persisted_documents(),
                    created_at: self.clock.now_millis(),
                };
                agents.push(created.clone());
                tracing::info!(id = %created.id, name = %created.name, "agent created");
                created
            }
        };

        self.save(&agents)?;
        Ok(agent)
    }

    fn remove(&self, id: &str) -> Result<Vec<Agent>, CoreError> {
        let agents = self.list_all();
        let before = agents.len();
        let remaining: Vec<Agent> = agents.into_iter().filter(|agent| agent.id != id).collect();

        self.save(&remaining)?;
        if remaining.len() < before {
            tracing::info!(id, "agent deleted");
        }
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentType;
    use botdesk_store::MemoryStore;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn repo_at(millis: i64) -> (Arc<MemoryStore>, StoreAgentRepository) {
        let store = Arc::new(MemoryStore::new());
        let repo = StoreAgentRepository::with_clock(store.clone(), Arc::new(FixedClock(millis)));
        (store, repo)
    }

    fn draft(name: &str, kind: AgentType) -> AgentDraft {
        AgentDraft {
            name: name.to_string(),
            kind,
            description: "d".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_all_empty_when_key_absent() {
        let (_, repo) = repo_at(0);
        assert!(repo.list_all().is_empty());
    }

    #[test]
    fn test_list_all_empty_when_malformed() {
        let (store, repo) = repo_at(0);
        store.set(AGENTS_KEY, "{not json").unwrap();
        assert!(repo.list_all().is_empty());

        store.set(AGENTS_KEY, "null").unwrap();
        assert!(repo.list_all().is_empty());
    }

    #[test]
    fn test_create_appends_with_fresh_id_and_timestamp() {
        let (_, repo) = repo_at(1_000);
        let first = repo.upsert(&draft("one", AgentType::AdmissionBot), None).unwrap();
        let second = repo.upsert(&draft("two", AgentType::AdmissionBot), None).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, 1_000);

        let names: Vec<_> = repo.list_all().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_update_preserves_id_created_at_and_position() {
        let (store, repo) = repo_at(1_000);
        let first = repo.upsert(&draft("one", AgentType::AdmissionBot), None).unwrap();
        repo.upsert(&draft("two", AgentType::AdmissionBot), None).unwrap();

        let later = StoreAgentRepository::with_clock(store, Arc::new(FixedClock(9_999)));
        let updated = later
            .upsert(&draft("renamed", AgentType::SummarisationBot), Some(&first.id))
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.created_at, 1_000);
        assert_eq!(updated.kind, AgentType::SummarisationBot);

        let agents = later.list_all();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name, "renamed");
    }

    #[test]
    fn test_upsert_with_unknown_id_creates() {
        let (_, repo) = repo_at(5);
        let agent = repo.upsert(&draft("x", AgentType::AdmissionBot), Some("missing")).unwrap();
        assert_ne!(agent.id, "missing");
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn test_documents_dropped_for_non_advanced_types() {
        let (_, repo) = repo_at(0);
        let mut input = draft("docs", AgentType::CollegeQueryBot);
        input.documents = vec!["a.pdf".to_string()];

        let agent = repo.upsert(&input, None).unwrap();
        assert!(agent.documents.is_empty());
        assert!(repo.get_by_id(&agent.id).unwrap().documents.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_, repo) = repo_at(0);
        let keep = repo.upsert(&draft("keep", AgentType::AdmissionBot), None).unwrap();
        let drop = repo.upsert(&draft("drop", AgentType::AdmissionBot), None).unwrap();

        let once = repo.remove(&drop.id).unwrap();
        let twice = repo.remove(&drop.id).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, vec![keep]);
        assert_eq!(repo.list_all(), once);
    }

    #[test]
    fn test_get_by_id_missing() {
        let (_, repo) = repo_at(0);
        assert!(repo.get_by_id("nope").is_none());
    }
}
