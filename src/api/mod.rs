//! Request Handling Module
//!
//! Turns a routed [`crate::routing::Operation`] into a response.
//!
//! ## Pipeline
//! 1. **Decode**: JSON body for writes, path/query values for reads.
//! 2. **Validate**: required fields must be non-empty (`types`).
//! 3. **Store**: one `Collection` call (two for the author listing), each under a deadline.
//! 4. **Encode**: bare JSON on success, `{"error": ...}` on failure (`response`).
//!
//! ## Submodules
//! - **`context`**: the injected stores and policies (`AppContext`).
//! - **`handlers`**: one function per operation, plus pagination helpers.
//! - **`response`**: the error taxonomy and its HTTP mapping.
//! - **`types`**: `User` and `Post`, validation, password hashing.

pub mod context;
pub mod handlers;
pub mod response;
pub mod types;
