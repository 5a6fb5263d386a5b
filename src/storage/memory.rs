use super::backend::{Collection, Entity, StoreResult};

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Keyed in-process table for one entity kind.
///
/// A single reader/writer lock guards the whole map: lookups and scans share it, upserts
/// take it exclusively. Critical sections only clone or move values, so the lock is
/// never held across an `.await` or while (de)serializing.
pub struct EntityStore<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V: Entity> EntityStore<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, id: &str) -> Option<V> {
        self.entries.read().get(id).cloned()
    }

    /// Snapshot of every entry at the time of the call.
    pub fn list(&self) -> Vec<V> {
        self.entries.read().values().cloned().collect()
    }

    /// Last write wins: an existing entry with the same id is replaced.
    pub fn put(&self, value: V) {
        let id = value.id().to_string();
        let replaced = self.entries.write().insert(id.clone(), value).is_some();
        if replaced {
            tracing::debug!("Overwrote existing entry {}", id);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Entity> Default for EntityStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V: Entity> Collection<V> for EntityStore<V> {
    async fn find_one(&self, id: &str) -> StoreResult<Option<V>> {
        Ok(self.get(id))
    }

    async fn find(&self) -> StoreResult<Vec<V>> {
        Ok(self.list())
    }

    async fn insert_one(&self, value: V) -> StoreResult<()> {
        self.put(value);
        Ok(())
    }
}
