//! Storage Module Tests
//!
//! Validates the in-memory entity table and its `Collection` facade.
//!
//! ## Test Scopes
//! - **EntityStore**: point lookup, snapshot scan, upsert semantics.
//! - **Concurrency**: parallel writers do not lose updates; readers see whole values.

#[cfg(test)]
mod tests {
    use crate::storage::backend::{Collection, Entity};
    use crate::storage::memory::EntityStore;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRecord {
        id: String,
        body: String,
    }

    impl Entity for TestRecord {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn record(id: &str, body: &str) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    // ============================================================
    // ENTITY STORE TESTS
    // ============================================================

    #[test]
    fn test_get_missing_returns_none() {
        let store: EntityStore<TestRecord> = EntityStore::new();

        assert!(store.get("999").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let store = EntityStore::new();
        store.put(record("1", "first"));

        assert_eq!(store.get("1"), Some(record("1", "first")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_same_id_overwrites() {
        let store = EntityStore::new();
        store.put(record("1", "first"));
        store.put(record("1", "second"));

        assert_eq!(store.len(), 1, "Upsert must not create a second entry");
        assert_eq!(store.get("1").unwrap().body, "second");
    }

    #[test]
    fn test_list_is_snapshot() {
        let store = EntityStore::new();
        store.put(record("1", "a"));
        store.put(record("2", "b"));

        let snapshot = store.list();
        store.put(record("3", "c"));

        assert_eq!(snapshot.len(), 2, "Later writes must not leak into an earlier snapshot");
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_list_empty_store() {
        let store: EntityStore<TestRecord> = EntityStore::new();
        assert!(store.list().is_empty());
    }

    // ============================================================
    // COLLECTION FACADE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_collection_facade_matches_store() {
        let store = EntityStore::new();

        store.insert_one(record("7", "seven")).await.unwrap();

        assert_eq!(store.find_one("7").await.unwrap(), Some(record("7", "seven")));
        assert_eq!(store.find_one("8").await.unwrap(), None);
        assert_eq!(store.find().await.unwrap().len(), 1);
    }

    // ============================================================
    // CONCURRENCY TESTS
    // ============================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_lose_nothing() {
        let store: Arc<EntityStore<TestRecord>> = Arc::new(EntityStore::new());

        let mut handles = Vec::new();
        for i in 0..100 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.put(record(&i.to_string(), "payload"));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_readers_never_see_torn_values() {
        let store: Arc<EntityStore<TestRecord>> = Arc::new(EntityStore::new());
        store.put(record("1", "aaaa"));

        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..1_000 {
                    let body = if i % 2 == 0 { "bbbb" } else { "aaaa" };
                    store.put(record("1", body));
                }
            })
        };

        for _ in 0..1_000 {
            let seen = store.get("1").unwrap();
            assert!(seen.body == "aaaa" || seen.body == "bbbb");
        }
        writer.join().unwrap();
    }
}
