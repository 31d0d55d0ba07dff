//! ObjeX Core - Domain-object access layer
//!
//! This crate provides the routing and delegation core of ObjeX, including:
//! - DomainObject model with extensible metadata
//! - ObjectProvider contract with an explicit capability set per provider
//! - Namespace-keyed provider registry with an optional fallback provider
//! - Synthetic root object assembled live from a root composition registry
//! - CRUD dispatch that fails before any asynchronous work on misconfiguration
//! - Narrow mutation/observation boundary delegating to an external engine
//!
//! The access layer itself performs no I/O: all persistence lives behind
//! provider implementations, and all in-place object mutation lives behind
//! the mutation engine.

pub mod access;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod mutation;
pub mod provider;
pub mod roots;

mod registry;

// Re-export commonly used types
pub use access::{ObjectAccess, ObjectAccessBuilder};
pub use errors::{ErrorKind, ObjexError, Result};
pub use model::{DomainObject, Metadata};
pub use mutation::{MutableHandle, MutationEngine, ObserverCallback, Subscription};
pub use provider::{Capabilities, ObjectProvider, ProviderMethod};
pub use roots::RootObjectProvider;
