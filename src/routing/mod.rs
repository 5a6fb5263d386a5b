//! Pattern Router
//!
//! Maps `(method, path, query)` to an [`rules::Operation`] using a fixed, ordered rule
//! table. Anything no rule claims (including PUT/DELETE on known paths) becomes
//! `Operation::NotFound`.

pub mod rules;

pub use rules::{Operation, match_route};

#[cfg(test)]
mod tests;
