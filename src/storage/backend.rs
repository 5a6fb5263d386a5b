//! Persistence Seam
//!
//! The request handlers never touch a concrete table. They talk to a `Collection<V>`,
//! the same three calls a document-store client exposes (`findOne`, `find`,
//! `insertOne`), so the in-memory store, a networked backend, or a test double can be
//! injected through `AppContext`.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Anything stored in a collection is addressed by a caller-supplied string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not serve the call (connection lost, driver error, ...).
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The call did not finish within its per-operation deadline.
    #[error("{op} exceeded its deadline of {after:?}")]
    DeadlineExceeded { op: &'static str, after: Duration },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Collection<V: Entity>: Send + Sync {
    /// Point lookup by id. `Ok(None)` means absent, never an error.
    async fn find_one(&self, id: &str) -> StoreResult<Option<V>>;

    /// Unfiltered scan. Enumeration order is backend-defined.
    async fn find(&self) -> StoreResult<Vec<V>>;

    /// Upsert keyed by `value.id()`.
    async fn insert_one(&self, value: V) -> StoreResult<()>;
}

/// Runs a backend call under a deadline. A call still pending after `after` is
/// abandoned and reported as `DeadlineExceeded`; nothing is retried here.
pub async fn with_deadline<T, F>(op: &'static str, after: Duration, call: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    match tokio::time::timeout(after, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("{} timed out after {:?}", op, after);
            Err(StoreError::DeadlineExceeded { op, after })
        }
    }
}
