#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use objex_core::{
    Capabilities, DomainObject, MutableHandle, MutationEngine, ObjectProvider, ObjexError,
    ObserverCallback, Result, Subscription,
};
use objex_core_types::Identifier;
use serde_json::Value;
use uuid::Uuid;

/// Create an identifier with a fresh UUID v7 key in the given namespace
pub fn unique_identifier(namespace: &str) -> Identifier {
    Identifier::new(namespace, Uuid::now_v7().to_string())
}

/// Stub provider that counts invocations per method
///
/// `get` synthesizes a folder object echoing the requested identifier;
/// `save`/`delete` resolve successfully. The counters let tests assert that
/// dispatch errors are raised before any provider code runs.
pub struct CountingProvider {
    capabilities: Capabilities,
    pub get_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(capabilities: Capabilities) -> Arc<Self> {
        Arc::new(Self {
            capabilities,
            get_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
            + self.save_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectProvider for CountingProvider {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    async fn get(&self, identifier: &Identifier) -> Result<DomainObject> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(DomainObject::new(identifier.clone(), "folder", "Stub"))
    }

    async fn save(&self, _object: &DomainObject) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, _object: &DomainObject) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Provider whose every operation rejects with a persistence error
///
/// Used to verify that backend failures pass through the dispatcher
/// unreinterpreted.
pub struct FailingProvider;

impl FailingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }

    fn failure() -> ObjexError {
        ObjexError::Persistence {
            message: "backend unavailable".to_string(),
        }
    }
}

#[async_trait]
impl ObjectProvider for FailingProvider {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    async fn get(&self, _identifier: &Identifier) -> Result<DomainObject> {
        Err(Self::failure())
    }

    async fn save(&self, _object: &DomainObject) -> Result<()> {
        Err(Self::failure())
    }

    async fn delete(&self, _object: &DomainObject) -> Result<()> {
        Err(Self::failure())
    }
}

/// Mutation engine that records every forwarded call
///
/// `sets` collects `(identifier, path, value)` triples; `notify` fires the
/// callbacks registered for a path so tests can observe the full wiring.
/// Cancelling a subscription removes its observer.
#[derive(Default)]
pub struct RecordingEngine {
    sets: Arc<Mutex<Vec<(Identifier, String, Value)>>>,
    observers: Arc<Mutex<Vec<Observer>>>,
    next_observer_id: Arc<AtomicUsize>,
}

struct Observer {
    id: usize,
    identifier: Identifier,
    path: String,
    callback: ObserverCallback,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Recorded `set` calls as `(identifier, path, value)`
    pub fn recorded_sets(&self) -> Vec<(Identifier, String, Value)> {
        self.sets.lock().unwrap().clone()
    }

    /// Number of currently registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.lock().unwrap().len()
    }

    /// Fire every callback registered for `path` on `identifier`
    pub fn notify(&self, identifier: &Identifier, path: &str, value: &Value) {
        let mut observers = self.observers.lock().unwrap();
        for observer in observers.iter_mut() {
            if observer.identifier == *identifier && observer.path == path {
                (observer.callback)(value);
            }
        }
    }
}

struct RecordingHandle {
    identifier: Identifier,
    sets: Arc<Mutex<Vec<(Identifier, String, Value)>>>,
    observers: Arc<Mutex<Vec<Observer>>>,
    next_observer_id: Arc<AtomicUsize>,
}

impl MutableHandle for RecordingHandle {
    fn set(&mut self, path: &str, value: Value) -> Result<()> {
        self.sets
            .lock()
            .unwrap()
            .push((self.identifier.clone(), path.to_string(), value));
        Ok(())
    }

    fn on(&mut self, path: &str, callback: ObserverCallback) -> Subscription {
        let id = self.next_observer_id.fetch_add(1, Ordering::SeqCst);
        self.observers.lock().unwrap().push(Observer {
            id,
            identifier: self.identifier.clone(),
            path: path.to_string(),
            callback,
        });

        let observers = self.observers.clone();
        Subscription::new(move || {
            observers.lock().unwrap().retain(|o| o.id != id);
        })
    }
}

impl MutationEngine for RecordingEngine {
    fn bind(&self, object: &DomainObject) -> Box<dyn MutableHandle> {
        Box::new(RecordingHandle {
            identifier: object.identifier.clone(),
            sets: self.sets.clone(),
            observers: self.observers.clone(),
            next_observer_id: self.next_observer_id.clone(),
        })
    }
}
