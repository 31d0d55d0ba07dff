//! Public surface of the access layer
//!
//! `ObjectAccess` owns the provider and root composition registries, routes
//! `get`/`save`/`delete` to the provider resolved for an identifier, and
//! delegates `mutate`/`observe` to the injected mutation engine. Privileged
//! configuration (the fallback provider, the mutation engine) is fixed at
//! construction time through `ObjectAccessBuilder`; no setter exists after
//! `build()`.
//!
//! Dispatch never awaits before invoking the provider: a misconfigured call
//! (`NoProviderMatched`, `UnsupportedOperation`) fails before any provider
//! code runs. Registry locks are released before any `.await`.

use std::sync::Arc;
use std::time::Instant;

use objex_core_types::Identifier;
use parking_lot::RwLock;
use serde_json::Value;

use crate::errors::{ObjexError, Result};
use crate::model::DomainObject;
use crate::mutation::{MutationEngine, ObserverCallback, Subscription};
use crate::provider::{ObjectProvider, ProviderMethod};
use crate::registry::ProviderRegistry;
use crate::roots::RootObjectProvider;
use crate::{log_op_end, log_op_error, log_op_start};

/// Constructor-time configuration for [`ObjectAccess`]
///
/// Carries the privileged knobs: the fallback provider consulted when no
/// namespace provider matches, and the mutation engine backing
/// `mutate`/`observe`. Both are optional and immutable after `build()`.
#[derive(Default)]
pub struct ObjectAccessBuilder {
    fallback: Option<Arc<dyn ObjectProvider>>,
    mutation_engine: Option<Arc<dyn MutationEngine>>,
}

impl ObjectAccessBuilder {
    /// Install a provider used when no namespace-specific provider matches
    pub fn with_fallback_provider(mut self, provider: Arc<dyn ObjectProvider>) -> Self {
        self.fallback = Some(provider);
        self
    }

    /// Install the mutation engine backing `mutate` and `observe`
    pub fn with_mutation_engine(mut self, engine: Arc<dyn MutationEngine>) -> Self {
        self.mutation_engine = Some(engine);
        self
    }

    /// Construct the access layer
    pub fn build(self) -> ObjectAccess {
        ObjectAccess {
            providers: RwLock::new(ProviderRegistry::new()),
            root_provider: Arc::new(RootObjectProvider::new()),
            fallback: self.fallback,
            mutation_engine: self.mutation_engine,
        }
    }
}

/// Domain-object access layer
///
/// Constructed once per application and shared by reference (or `Arc`).
/// Providers and root entries may be added or removed at any time and take
/// effect immediately for subsequent dispatches.
pub struct ObjectAccess {
    providers: RwLock<ProviderRegistry>,
    root_provider: Arc<RootObjectProvider>,
    fallback: Option<Arc<dyn ObjectProvider>>,
    mutation_engine: Option<Arc<dyn MutationEngine>>,
}

impl ObjectAccess {
    /// Start building an access layer with privileged configuration
    pub fn builder() -> ObjectAccessBuilder {
        ObjectAccessBuilder::default()
    }

    /// Construct an access layer with no fallback provider and no engine
    pub fn new() -> Self {
        Self::builder().build()
    }

    // ===== Provider registration & resolution =====

    /// Register or replace the provider for `namespace`
    pub fn add_provider(&self, namespace: impl Into<String>, provider: Arc<dyn ObjectProvider>) {
        let namespace = namespace.into();
        tracing::debug!(
            component = module_path!(),
            namespace = %namespace,
            "provider registered"
        );
        self.providers.write().add(namespace, provider);
    }

    /// Resolve the provider responsible for `identifier`
    ///
    /// Priority: the root provider for the root sentinel, then the
    /// namespace-registered provider, then the fallback provider.
    pub fn provider_for(&self, identifier: &Identifier) -> Option<Arc<dyn ObjectProvider>> {
        if identifier.is_root() {
            return Some(self.root_provider.clone());
        }
        if let Some(provider) = self.providers.read().get(identifier.namespace()) {
            return Some(provider);
        }
        self.fallback.clone()
    }

    /// Number of namespaces with a registered provider
    pub fn provider_count(&self) -> usize {
        self.providers.read().len()
    }

    // ===== Root composition =====

    /// Contribute `identifier` as the newest entry of the root composition
    pub fn add_root(&self, identifier: Identifier) {
        tracing::debug!(
            component = module_path!(),
            identifier = %identifier,
            roots_len = self.root_provider.roots_len() + 1,
            "root added"
        );
        self.root_provider.add_root(identifier);
    }

    /// Remove every root entry structurally equal to `identifier`
    pub fn remove_root(&self, identifier: &Identifier) {
        self.root_provider.remove_root(identifier);
        tracing::debug!(
            component = module_path!(),
            identifier = %identifier,
            roots_len = self.root_provider.roots_len(),
            "root removed"
        );
    }

    /// Current root composition, newest first
    pub fn root_composition(&self) -> Vec<Identifier> {
        self.root_provider.composition()
    }

    // ===== CRUD dispatch =====

    /// Fetch the object named by `identifier` through its provider
    pub async fn get(&self, identifier: &Identifier) -> Result<DomainObject> {
        log_op_start!("get", identifier = %identifier);
        let start = Instant::now();

        let provider = match self.resolve(identifier, ProviderMethod::Get) {
            Ok(provider) => provider,
            Err(err) => {
                log_op_error!("get", err, duration_ms = 0u64, identifier = %identifier);
                return Err(err);
            }
        };

        let result = provider.get(identifier).await;
        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => log_op_end!("get", duration_ms = elapsed, identifier = %identifier),
            Err(err) => log_op_error!("get", *err, duration_ms = elapsed, identifier = %identifier),
        }
        result
    }

    /// Persist `object` through the provider for its identifier
    pub async fn save(&self, object: &DomainObject) -> Result<()> {
        log_op_start!("save", identifier = %object.identifier);
        let start = Instant::now();

        let provider = match self.resolve(&object.identifier, ProviderMethod::Save) {
            Ok(provider) => provider,
            Err(err) => {
                log_op_error!("save", err, duration_ms = 0u64, identifier = %object.identifier);
                return Err(err);
            }
        };

        let result = provider.save(object).await;
        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("save", duration_ms = elapsed, identifier = %object.identifier),
            Err(err) => {
                log_op_error!("save", *err, duration_ms = elapsed, identifier = %object.identifier)
            }
        }
        result
    }

    /// Remove `object` through the provider for its identifier
    pub async fn delete(&self, object: &DomainObject) -> Result<()> {
        log_op_start!("delete", identifier = %object.identifier);
        let start = Instant::now();

        let provider = match self.resolve(&object.identifier, ProviderMethod::Delete) {
            Ok(provider) => provider,
            Err(err) => {
                log_op_error!("delete", err, duration_ms = 0u64, identifier = %object.identifier);
                return Err(err);
            }
        };

        let result = provider.delete(object).await;
        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("delete", duration_ms = elapsed, identifier = %object.identifier),
            Err(err) => {
                log_op_error!("delete", *err, duration_ms = elapsed, identifier = %object.identifier)
            }
        }
        result
    }

    /// Resolve and capability-check the provider for a dispatch
    ///
    /// Runs synchronously: a `NoProviderMatched` or `UnsupportedOperation`
    /// failure here means no provider code was entered.
    fn resolve(
        &self,
        identifier: &Identifier,
        method: ProviderMethod,
    ) -> Result<Arc<dyn ObjectProvider>> {
        let provider =
            self.provider_for(identifier)
                .ok_or_else(|| ObjexError::NoProviderMatched {
                    identifier: identifier.clone(),
                })?;
        if !provider.capabilities().supports(method) {
            return Err(ObjexError::UnsupportedOperation {
                identifier: identifier.clone(),
                method,
            });
        }
        Ok(provider)
    }

    // ===== Mutation/observation facade =====

    /// Set the value at `path` on `object` through the mutation engine
    ///
    /// Pure delegation: the engine owns path addressing and the update
    /// itself; its result is returned verbatim.
    pub fn mutate(&self, object: &DomainObject, path: &str, value: Value) -> Result<()> {
        log_op_start!("mutate", identifier = %object.identifier, path = path);
        let start = Instant::now();

        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(err) => {
                log_op_error!("mutate", err, duration_ms = 0u64, path = path);
                return Err(err);
            }
        };

        let result = engine.bind(object).set(path, value);
        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("mutate", duration_ms = elapsed, path = path),
            Err(err) => log_op_error!("mutate", *err, duration_ms = elapsed, path = path),
        }
        result
    }

    /// Register `callback` for changes at `path` on `object`
    ///
    /// Returns the engine's deregistration handle verbatim.
    pub fn observe(
        &self,
        object: &DomainObject,
        path: &str,
        callback: ObserverCallback,
    ) -> Result<Subscription> {
        log_op_start!("observe", identifier = %object.identifier, path = path);
        let start = Instant::now();

        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(err) => {
                log_op_error!("observe", err, duration_ms = 0u64, path = path);
                return Err(err);
            }
        };

        let subscription = engine.bind(object).on(path, callback);
        let elapsed = start.elapsed().as_millis() as u64;
        log_op_end!("observe", duration_ms = elapsed, path = path);
        Ok(subscription)
    }

    fn engine(&self) -> Result<&Arc<dyn MutationEngine>> {
        self.mutation_engine
            .as_ref()
            .ok_or(ObjexError::MutationEngineUnavailable)
    }
}

impl Default for ObjectAccess {
    fn default() -> Self {
        Self::new()
    }
}
