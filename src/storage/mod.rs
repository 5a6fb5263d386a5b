//! Storage Module
//!
//! Keyed, concurrency-safe entity tables.
//!
//! ## Core Concepts
//! - **Collection**: the async persistence seam handlers program against (`backend`).
//! - **EntityStore**: the in-process implementation, one `RwLock<HashMap>` per entity kind
//!   (`memory`).
//! - **Isolation**: each store owns its own lock. No operation mutates two stores, so no
//!   lock ordering is needed between them.

pub mod backend;
pub mod memory;

#[cfg(test)]
mod tests;
