use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::ObjectProvider;

/// Namespace to provider mapping
///
/// The namespace is the sole sharding key: lookups are O(1) and providers
/// never claim individual identifiers. A later registration under the same
/// namespace replaces the prior one; there is no multi-provider fan-out.
#[derive(Default)]
pub(crate) struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ObjectProvider>>,
}

impl ProviderRegistry {
    pub(crate) fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register or replace the provider for `namespace`
    pub(crate) fn add(&mut self, namespace: impl Into<String>, provider: Arc<dyn ObjectProvider>) {
        self.providers.insert(namespace.into(), provider);
    }

    /// Look up the provider registered for `namespace`
    pub(crate) fn get(&self, namespace: &str) -> Option<Arc<dyn ObjectProvider>> {
        self.providers.get(namespace).cloned()
    }

    /// Number of registered namespaces
    pub(crate) fn len(&self) -> usize {
        self.providers.len()
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    #[allow(dead_code)]
    pub(crate) fn contains(&self, namespace: &str) -> bool {
        self.providers.contains_key(namespace)
    }
}
