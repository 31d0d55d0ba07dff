//! Mutation/observation boundary
//!
//! The access layer routes and persists objects but never edits one in
//! place: path-scoped updates and change notification belong to an external
//! mutation engine. This module defines the narrow contract that engine
//! implements - bind a handle to a loaded object, then `set` or `on` through
//! it - so the access layer never learns the engine's path addressing scheme.

use serde_json::Value;

use crate::errors::Result;
use crate::model::DomainObject;

/// Callback invoked with the new value on each change at an observed path
pub type ObserverCallback = Box<dyn FnMut(&Value) + Send>;

/// Factory for mutable handles over loaded domain objects
///
/// Implemented by the external mutation engine and injected at
/// `ObjectAccess` construction time. The engine, not this crate, owns
/// in-memory object identity across mutation and observation.
pub trait MutationEngine: Send + Sync {
    /// Construct a handle bound to `object`
    fn bind(&self, object: &DomainObject) -> Box<dyn MutableHandle>;
}

/// Path-scoped mutation and observation over one bound object
///
/// The syntax and resolution of `path` is owned entirely by the engine;
/// the facade forwards it opaquely.
pub trait MutableHandle {
    /// Set the value at `path` on the bound object
    fn set(&mut self, path: &str, value: Value) -> Result<()>;

    /// Register `callback` for changes at `path`
    fn on(&mut self, path: &str, callback: ObserverCallback) -> Subscription;
}

/// Deregistration handle for one observation
///
/// Wraps the engine-supplied cancel action. Cancelling twice is a no-op;
/// dropping without cancelling leaves the observation registered.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap an engine-supplied cancel action
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancel the observation; runs the engine's cancel action at most once
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether the observation is still registered
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
