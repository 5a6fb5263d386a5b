//! Entity Types
//!
//! Wire and storage shapes for users and posts. Both derive `Default` and decode with
//! `#[serde(default)]`, so an absent JSON field arrives as an empty string and is
//! rejected by validation (400) rather than by the decoder (500).

use crate::config::ValidationPolicy;
use crate::storage::backend::Entity;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Hex SHA-256 digest once stored; plaintext only on the inbound request.
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: String,
    /// Id of the authoring user. Not checked against the user store on write.
    pub author: String,
    pub caption: String,
    pub image: String,
    pub time: String,
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl User {
    /// Name of the first required field left empty, if any.
    pub fn missing_field(&self, policy: ValidationPolicy) -> Option<&'static str> {
        first_empty(
            &[
                ("id", &self.id),
                ("name", &self.name),
                ("email", &self.email),
                ("password", &self.password),
            ],
            policy,
        )
    }

    pub fn with_hashed_password(mut self) -> Self {
        self.password = hash_password(&self.password);
        self
    }
}

impl Post {
    pub fn missing_field(&self, policy: ValidationPolicy) -> Option<&'static str> {
        first_empty(
            &[
                ("id", &self.id),
                ("author", &self.author),
                ("caption", &self.caption),
                ("image", &self.image),
                ("time", &self.time),
            ],
            policy,
        )
    }
}

/// Lowercase hex SHA-256 of the plaintext.
pub fn hash_password(plain: &str) -> String {
    format!("{:x}", Sha256::digest(plain.as_bytes()))
}

// `id` comes first in every field list, so `IdOnly` checks just the head.
fn first_empty(
    fields: &[(&'static str, &String)],
    policy: ValidationPolicy,
) -> Option<&'static str> {
    let required = match policy {
        ValidationPolicy::Strict => fields,
        ValidationPolicy::IdOnly => &fields[..1],
    };
    required
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}
