use super::types::{Post, User};
use crate::config::{Config, Deadlines, ValidationPolicy};
use crate::storage::backend::Collection;
use crate::storage::memory::EntityStore;
use std::sync::Arc;

/// Everything a request handler needs, built once at startup and shared by `Arc`.
///
/// The two collections are independent; neither handler path locks both at once.
pub struct AppContext {
    pub users: Arc<dyn Collection<User>>,
    pub posts: Arc<dyn Collection<Post>>,
    pub deadlines: Deadlines,
    pub validation: ValidationPolicy,
}

impl AppContext {
    pub fn new(users: Arc<dyn Collection<User>>, posts: Arc<dyn Collection<Post>>) -> Self {
        Self {
            users,
            posts,
            deadlines: Deadlines::default(),
            validation: ValidationPolicy::default(),
        }
    }

    /// Fresh, empty in-process stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(EntityStore::<User>::new()),
            Arc::new(EntityStore::<Post>::new()),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::in_memory()
            .with_deadlines(config.deadlines())
            .with_validation(config.validation)
    }

    pub fn with_deadlines(mut self, deadlines: Deadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }
}
