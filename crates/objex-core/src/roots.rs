use std::sync::Arc;

use async_trait::async_trait;
use objex_core_types::Identifier;
use parking_lot::RwLock;

use crate::errors::Result;
use crate::model::DomainObject;
use crate::provider::{Capabilities, ObjectProvider};

/// Type discriminator carried by the synthesized root object
pub const ROOT_OBJECT_TYPE: &str = "root";

/// Display name carried by the synthesized root object
pub const ROOT_OBJECT_NAME: &str = "The root object";

/// Ordered sequence of identifiers contributed as children of the root object
///
/// Insertion is front-first, so the most recently added entry appears first
/// in the root object's composition. Duplicates accumulate on insert; removal
/// clears every structural match.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RootRegistry {
    roots: Vec<Identifier>,
}

impl RootRegistry {
    pub(crate) fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Insert `identifier` at the front of the sequence
    pub(crate) fn add(&mut self, identifier: Identifier) {
        self.roots.insert(0, identifier);
    }

    /// Remove every entry structurally equal to `identifier`; no-op if absent
    pub(crate) fn remove(&mut self, identifier: &Identifier) {
        self.roots.retain(|entry| entry != identifier);
    }

    /// Snapshot of the current sequence, newest first
    pub(crate) fn composition(&self) -> Vec<Identifier> {
        self.roots.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.roots.len()
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Provider backing the root sentinel
///
/// Holds the root composition registry and synthesizes the root object on
/// demand; nothing is ever persisted. Read-only: `save` and `delete` against
/// the root sentinel are rejected at dispatch time by the capability check.
pub struct RootObjectProvider {
    registry: Arc<RwLock<RootRegistry>>,
}

impl RootObjectProvider {
    pub(crate) fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(RootRegistry::new())),
        }
    }

    /// Contribute `identifier` as the newest root entry
    pub(crate) fn add_root(&self, identifier: Identifier) {
        self.registry.write().add(identifier);
    }

    /// Drop every contributed entry structurally equal to `identifier`
    pub(crate) fn remove_root(&self, identifier: &Identifier) {
        self.registry.write().remove(identifier);
    }

    /// Current composition, newest first
    pub(crate) fn composition(&self) -> Vec<Identifier> {
        self.registry.read().composition()
    }

    pub(crate) fn roots_len(&self) -> usize {
        self.registry.read().len()
    }
}

#[async_trait]
impl ObjectProvider for RootObjectProvider {
    fn capabilities(&self) -> Capabilities {
        Capabilities::read_only()
    }

    /// Synthesize the root object from the live registry state
    ///
    /// The input identifier is ignored and the call never fails.
    async fn get(&self, _identifier: &Identifier) -> Result<DomainObject> {
        let composition = self.registry.read().composition();
        Ok(
            DomainObject::new(Identifier::root(), ROOT_OBJECT_TYPE, ROOT_OBJECT_NAME)
                .with_composition(composition),
        )
    }
}
