//! Identifier value type for domain-object routing
//!
//! An [`Identifier`] names exactly one domain object: a `namespace` selecting
//! the backend responsible for the object, and a `key` unique within that
//! namespace. Identifiers are immutable value objects with structural
//! equality, and round-trip through the `"namespace:key"` text form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved key selecting the synthetic root object.
///
/// Real identifiers must not use this literal; the dispatcher routes any
/// identifier carrying it to the built-in root provider before namespace
/// lookup happens.
pub const ROOT_KEY: &str = "ROOT";

/// Unique name of a domain object
///
/// Equality and hashing are structural over `(namespace, key)`. The fields
/// are private to keep identifiers immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    namespace: String,
    key: String,
}

impl Identifier {
    /// Create an identifier from a namespace and a key
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// The reserved sentinel identifier of the synthetic root object
    pub fn root() -> Self {
        Self {
            namespace: String::new(),
            key: ROOT_KEY.to_string(),
        }
    }

    /// Get the namespace component
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the key component
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this identifier is the root sentinel
    ///
    /// The check is on the key alone: an identifier carrying the reserved
    /// key selects the root provider regardless of its namespace.
    pub fn is_root(&self) -> bool {
        self.key == ROOT_KEY
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}:{}", self.namespace, self.key)
        }
    }
}

/// Error produced when parsing an identifier from its text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdentifierError {
    /// The key portion was empty (`""`, `"ns:"`)
    #[error("identifier key cannot be empty")]
    EmptyKey,
}

impl std::str::FromStr for Identifier {
    type Err = ParseIdentifierError;

    /// Parse the `"namespace:key"` text form
    ///
    /// Text before the first `:` is the namespace; the remainder is the key.
    /// Without a `:` the whole input is the key and the namespace is empty,
    /// so keys containing `:` only round-trip when a namespace is present.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, key) = match s.split_once(':') {
            Some((namespace, key)) => (namespace, key),
            None => ("", s),
        };
        if key.is_empty() {
            return Err(ParseIdentifierError::EmptyKey);
        }
        Ok(Self::new(namespace, key))
    }
}
