//! Access Layer Demonstration
//!
//! This example demonstrates the ObjeX domain-object access layer end to end.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Provider registration per namespace (plus a fallback provider)
//! 2. Identity-routed get/save/delete dispatch
//! 3. The synthetic root object composed from registered contributions
//! 4. Dispatch failures for unclaimed namespaces and unsupported methods
//! 5. Path-scoped mutation and observation through the mutation engine

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use objex_core::{
    Capabilities, DomainObject, MutableHandle, MutationEngine, ObjectAccess, ObjectProvider,
    ObjexError, ObserverCallback, Result, Subscription,
};
use objex_core_types::Identifier;
use serde_json::{json, Value};

/// Example-local in-memory provider keyed by identifier
#[derive(Default)]
struct MemoryProvider {
    objects: Mutex<HashMap<Identifier, DomainObject>>,
}

#[async_trait]
impl ObjectProvider for MemoryProvider {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    async fn get(&self, identifier: &Identifier) -> Result<DomainObject> {
        self.objects
            .lock()
            .unwrap()
            .get(identifier)
            .cloned()
            .ok_or_else(|| ObjexError::ObjectNotFound {
                identifier: identifier.clone(),
            })
    }

    async fn save(&self, object: &DomainObject) -> Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(object.identifier.clone(), object.clone());
        Ok(())
    }

    async fn delete(&self, object: &DomainObject) -> Result<()> {
        self.objects.lock().unwrap().remove(&object.identifier);
        Ok(())
    }
}

/// Example-local engine that applies `set` to a shared value map and fans
/// notifications out to observers registered per (identifier, path)
#[derive(Default)]
struct DemoEngine {
    values: Arc<Mutex<HashMap<(Identifier, String), Value>>>,
    observers: Arc<Mutex<Vec<((Identifier, String), ObserverCallback)>>>,
}

struct DemoHandle {
    identifier: Identifier,
    values: Arc<Mutex<HashMap<(Identifier, String), Value>>>,
    observers: Arc<Mutex<Vec<((Identifier, String), ObserverCallback)>>>,
}

impl MutableHandle for DemoHandle {
    fn set(&mut self, path: &str, value: Value) -> Result<()> {
        let slot = (self.identifier.clone(), path.to_string());
        self.values.lock().unwrap().insert(slot.clone(), value.clone());
        for (key, callback) in self.observers.lock().unwrap().iter_mut() {
            if *key == slot {
                callback(&value);
            }
        }
        Ok(())
    }

    fn on(&mut self, path: &str, callback: ObserverCallback) -> Subscription {
        let slot = (self.identifier.clone(), path.to_string());
        self.observers.lock().unwrap().push((slot, callback));
        Subscription::new(|| {})
    }
}

impl MutationEngine for DemoEngine {
    fn bind(&self, object: &DomainObject) -> Box<dyn MutableHandle> {
        Box::new(DemoHandle {
            identifier: object.identifier.clone(),
            values: self.values.clone(),
            observers: self.observers.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== ObjeX Access Layer Demo ===\n");

    // ===== Part 1: Providers and Routing =====
    println!("## Part 1: Providers and Routing\n");

    let engine = Arc::new(DemoEngine::default());
    let access = ObjectAccess::builder()
        .with_fallback_provider(Arc::new(MemoryProvider::default()))
        .with_mutation_engine(engine)
        .build();
    println!("Built access layer with fallback provider and mutation engine");

    access.add_provider("folders", Arc::new(MemoryProvider::default()));
    println!("✓ Registered provider for namespace 'folders'");

    let mission_id = Identifier::new("folders", "mission");
    let mission = DomainObject::new(mission_id.clone(), "folder", "Mission Folder")
        .with_creator("demo")
        .with_extra("color", json!("green"));

    access.save(&mission).await?;
    println!("✓ Saved 'Mission Folder' through the folders provider");

    let fetched = access.get(&mission_id).await?;
    assert_eq!(fetched.name, "Mission Folder");
    println!("✓ Fetched it back: {} ({})", fetched.name, fetched.identifier);

    // An unclaimed namespace lands on the fallback provider
    let notes_id = Identifier::new("notes", "scratch");
    access
        .save(&DomainObject::new(notes_id.clone(), "note", "Scratch"))
        .await?;
    let note = access.get(&notes_id).await?;
    assert_eq!(note.object_type, "note");
    println!("✓ Unclaimed namespace 'notes' served by the fallback provider\n");

    // ===== Part 2: The Synthetic Root Object =====
    println!("## Part 2: The Synthetic Root Object\n");

    access.add_root(mission_id.clone());
    access.add_root(notes_id.clone());
    println!("✓ Contributed two root entries");

    let root = access.get(&Identifier::root()).await?;
    println!(
        "Root object '{}' (type {}) has composition:",
        root.name, root.object_type
    );
    for child in root.composition.as_deref().unwrap_or_default() {
        println!("  - {}", child);
    }
    // Newest contribution first
    assert_eq!(
        root.composition,
        Some(vec![notes_id.clone(), mission_id.clone()])
    );

    access.remove_root(&notes_id);
    let root = access.get(&Identifier::root()).await?;
    assert_eq!(root.composition, Some(vec![mission_id.clone()]));
    println!("✓ Removed one entry; root composition is a live view\n");

    // ===== Part 3: Dispatch Failures =====
    println!("## Part 3: Dispatch Failures\n");

    let strict = ObjectAccess::new();
    let err = strict
        .get(&Identifier::new("unclaimed", "x"))
        .await
        .unwrap_err();
    println!("✓ No provider, no fallback: {} [{}]", err, err.code());

    let err = strict.save(&root).await.unwrap_err();
    println!("✓ Root provider is read-only: {} [{}]", err, err.code());

    // ===== Part 4: Mutation and Observation =====
    println!("\n## Part 4: Mutation and Observation\n");

    let mut subscription = access.observe(
        &fetched,
        "name",
        Box::new(|value| println!("  observer saw new name: {}", value)),
    )?;
    println!("✓ Observing 'name' on {}", fetched.identifier);

    access.mutate(&fetched, "name", json!("Renamed Mission"))?;
    println!("✓ Mutated 'name' through the engine");

    subscription.cancel();
    assert!(!subscription.is_active());
    println!("✓ Cancelled the observation");

    println!("\n=== Demo complete ===");
    Ok(())
}
