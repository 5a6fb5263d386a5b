//! Users & Posts Service Library
//!
//! The library crate behind the `post_service` binary (`main.rs`).
//!
//! ## Architecture Modules
//! Leaf first:
//!
//! - **`storage`**: Keyed, lock-guarded entity tables behind the async `Collection` seam,
//!   plus per-call deadlines.
//! - **`routing`**: The ordered `(method, path pattern) -> Operation` rule table.
//! - **`api`**: Decoding, validation, store access and the JSON response codec for each
//!   operation, driven by an injected `AppContext`.
//! - **`server`**: axum wiring that feeds every request through the router.
//! - **`config`**: Command-line / environment configuration.

pub mod api;
pub mod config;
pub mod routing;
pub mod server;
pub mod storage;
