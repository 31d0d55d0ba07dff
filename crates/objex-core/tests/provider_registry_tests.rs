mod common;

use std::sync::Arc;

use common::CountingProvider;
use objex_core::{Capabilities, ObjectAccess, ObjectProvider};
use objex_core_types::Identifier;

// ===== RESOLUTION PRIORITY TESTS =====

#[test]
fn test_root_sentinel_resolves_to_root_provider() {
    let access = ObjectAccess::new();

    let provider = access.provider_for(&Identifier::root()).unwrap();
    assert_eq!(provider.capabilities(), Capabilities::read_only());
}

#[test]
fn test_root_sentinel_wins_regardless_of_registered_providers() {
    let access = ObjectAccess::new();
    let namespaced = CountingProvider::new(Capabilities::all());
    access.add_provider("telemetry", namespaced.clone());

    // A sentinel carrying a claimed namespace still selects the root provider
    let sentinel = Identifier::new("telemetry", "ROOT");
    let resolved = access.provider_for(&sentinel).unwrap();
    assert_eq!(resolved.capabilities(), Capabilities::read_only());

    let regular: Arc<dyn ObjectProvider> = namespaced;
    let resolved = access
        .provider_for(&Identifier::new("telemetry", "channel-1"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &regular));
}

#[test]
fn test_namespace_provider_resolves_by_identity() {
    let access = ObjectAccess::new();
    let folders: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());
    let telemetry: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::read_only());

    access.add_provider("folders", folders.clone());
    access.add_provider("telemetry", telemetry.clone());

    let resolved = access
        .provider_for(&Identifier::new("folders", "mission"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &folders));

    let resolved = access
        .provider_for(&Identifier::new("telemetry", "channel-1"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &telemetry));
}

#[test]
fn test_later_registration_replaces_prior() {
    let access = ObjectAccess::new();
    let first: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());
    let second: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());

    access.add_provider("folders", first.clone());
    access.add_provider("folders", second.clone());

    let resolved = access
        .provider_for(&Identifier::new("folders", "x"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &second));
    assert_eq!(access.provider_count(), 1);
}

// ===== FALLBACK TESTS =====

#[test]
fn test_fallback_serves_unclaimed_namespaces() {
    let fallback: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());
    let access = ObjectAccess::builder()
        .with_fallback_provider(fallback.clone())
        .build();

    let resolved = access
        .provider_for(&Identifier::new("anything", "x"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &fallback));
}

#[test]
fn test_namespace_provider_shadows_fallback() {
    let fallback: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());
    let access = ObjectAccess::builder()
        .with_fallback_provider(fallback.clone())
        .build();
    let claimed: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::read_only());
    access.add_provider("folders", claimed.clone());

    let resolved = access
        .provider_for(&Identifier::new("folders", "x"))
        .unwrap();
    assert!(Arc::ptr_eq(&resolved, &claimed));
}

#[test]
fn test_no_provider_and_no_fallback_resolves_nothing() {
    let access = ObjectAccess::new();
    assert!(access.provider_for(&Identifier::new("other", "y")).is_none());
}

#[test]
fn test_incremental_registration_takes_effect_immediately() {
    let access = ObjectAccess::new();
    let identifier = Identifier::new("late", "x");
    assert!(access.provider_for(&identifier).is_none());

    let provider: Arc<dyn ObjectProvider> = CountingProvider::new(Capabilities::all());
    access.add_provider("late", provider.clone());

    let resolved = access.provider_for(&identifier).unwrap();
    assert!(Arc::ptr_eq(&resolved, &provider));
}
