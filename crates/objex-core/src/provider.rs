use async_trait::async_trait;
use objex_core_types::Identifier;

use crate::errors::{ObjexError, Result};
use crate::model::DomainObject;

/// Method selector used for capability checks and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderMethod {
    Get,
    Save,
    Delete,
}

impl ProviderMethod {
    /// Canonical lowercase name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderMethod::Get => "get",
            ProviderMethod::Save => "save",
            ProviderMethod::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ProviderMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared capability set of a provider
///
/// A provider need not implement all three methods. The dispatcher consults
/// this set before invoking anything, so an unsupported operation fails at
/// dispatch time rather than inside the provider's future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub get: bool,
    pub save: bool,
    pub delete: bool,
}

impl Capabilities {
    /// No methods supported
    pub const fn none() -> Self {
        Self {
            get: false,
            save: false,
            delete: false,
        }
    }

    /// All three methods supported
    pub const fn all() -> Self {
        Self {
            get: true,
            save: true,
            delete: true,
        }
    }

    /// Only `get` supported
    pub const fn read_only() -> Self {
        Self {
            get: true,
            save: false,
            delete: false,
        }
    }

    /// Enable `get`
    pub fn with_get(mut self) -> Self {
        self.get = true;
        self
    }

    /// Enable `save`
    pub fn with_save(mut self) -> Self {
        self.save = true;
        self
    }

    /// Enable `delete`
    pub fn with_delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Whether the given method is declared supported
    pub fn supports(&self, method: ProviderMethod) -> bool {
        match method {
            ProviderMethod::Get => self.get,
            ProviderMethod::Save => self.save,
            ProviderMethod::Delete => self.delete,
        }
    }
}

/// Backend provider contract for one namespace
///
/// Implementors override the methods they support and declare exactly those
/// in `capabilities()`. The default bodies reject with `UnsupportedOperation`
/// as a safety net; the dispatcher checks capabilities first, so a correctly
/// declared provider never reaches a default body through the access layer.
#[async_trait]
pub trait ObjectProvider: Send + Sync {
    /// Declare which methods this provider implements
    fn capabilities(&self) -> Capabilities;

    /// Fetch the object named by `identifier`
    async fn get(&self, identifier: &Identifier) -> Result<DomainObject> {
        Err(ObjexError::UnsupportedOperation {
            identifier: identifier.clone(),
            method: ProviderMethod::Get,
        })
    }

    /// Persist `object` in the backend
    async fn save(&self, object: &DomainObject) -> Result<()> {
        Err(ObjexError::UnsupportedOperation {
            identifier: object.identifier.clone(),
            method: ProviderMethod::Save,
        })
    }

    /// Remove `object` from the backend
    async fn delete(&self, object: &DomainObject) -> Result<()> {
        Err(ObjexError::UnsupportedOperation {
            identifier: object.identifier.clone(),
            method: ProviderMethod::Delete,
        })
    }
}
