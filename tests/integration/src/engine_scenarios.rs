//! Cross-crate engine scenarios with a scripted cluster.
//!
//! Exercises the full create/refresh/destroy lifecycle the way the
//! surrounding state-tracking layer drives it: the caller stores whatever
//! fingerprint the engine reports and passes it back on the next pass.

use std::sync::Arc;

use manifest_core::{Reconciliation, ResetReason, SyncEngine};
use manifest_test_utils::{Call, FakeCluster, ManifestDir};
use pretty_assertions::assert_eq;

fn engine(cluster: &Arc<FakeCluster>) -> SyncEngine {
    SyncEngine::new(Box::new(Arc::clone(cluster)))
}

/// The literal scenario: one file `a.txt` containing "hello", one live
/// resource at `/v1/ns/default/a`.
#[test]
fn literal_single_file_scenario() {
    let dir = ManifestDir::new().file("a.txt", "hello");
    let cluster = Arc::new(FakeCluster::with_selflinks(&["/v1/ns/default/a"]));
    let engine = engine(&cluster);

    // directory digest = sha1(sha1("hello") as hex)
    assert_eq!(
        manifest_fs::hash_directory(dir.path()).unwrap(),
        "9cf5caf6c36f5cccde8c73fad8894c958f4983da"
    );

    // First pass: previous fingerprint empty, combined value adopted.
    let first = engine.create_or_update(dir.path(), "").unwrap();
    assert_eq!(
        first.fingerprint(),
        "19185fa59780c89e966824a04d9199def308f7dd"
    );

    // Later: file content changed, stored fingerprint now stale.
    std::fs::write(dir.path().join("a.txt"), "world").unwrap();
    let second = engine.refresh(dir.path(), first.fingerprint()).unwrap();
    assert_eq!(
        second,
        Reconciliation::Reset {
            reason: ResetReason::Drifted
        }
    );
    assert_eq!(second.fingerprint(), "");
}

#[test]
fn full_lifecycle_create_refresh_destroy() {
    let dir = ManifestDir::new()
        .file("deployment.yaml", "kind: Deployment")
        .file("service.yaml", "kind: Service");
    let cluster = Arc::new(FakeCluster::with_selflinks(&[
        "/v1/ns/default/deploy",
        "/v1/ns/default/svc",
    ]));
    let engine = engine(&cluster);

    let created = engine.create_or_update(dir.path(), "").unwrap();
    assert!(created.is_tracked());

    // Stable acceptance: unchanged state keeps the same fingerprint.
    let refreshed = engine.refresh(dir.path(), created.fingerprint()).unwrap();
    assert_eq!(created, refreshed);

    engine.destroy(dir.path()).unwrap();

    let root = dir.path().to_path_buf();
    assert_eq!(
        cluster.calls(),
        vec![
            Call::Apply(root.clone()),
            Call::Query(root.clone()),
            Call::Query(root.clone()),
            Call::Delete(root),
        ]
    );
}

#[test]
fn vanished_live_resources_reset_the_fingerprint() {
    let dir = ManifestDir::new().file("a.yaml", "alpha");
    let cluster = Arc::new(FakeCluster::with_selflinks(&["/v1/a"]));
    let engine = engine(&cluster);

    let created = engine.create_or_update(dir.path(), "").unwrap();
    assert!(created.is_tracked());

    // Everything matching was deleted out-of-band.
    cluster.set_empty();
    let refreshed = engine.refresh(dir.path(), created.fingerprint()).unwrap();
    assert_eq!(
        refreshed,
        Reconciliation::Reset {
            reason: ResetReason::NoLiveResources
        }
    );
}

#[test]
fn update_after_drift_readopts_the_new_fingerprint() {
    let dir = ManifestDir::new().file("a.yaml", "alpha");
    let cluster = Arc::new(FakeCluster::with_selflinks(&["/v1/a"]));
    let engine = engine(&cluster);

    let created = engine.create_or_update(dir.path(), "").unwrap();

    // Manifest edited; refresh reports drift and the caller drops the
    // stored fingerprint.
    std::fs::write(dir.path().join("a.yaml"), "alpha-v2").unwrap();
    let drifted = engine.refresh(dir.path(), created.fingerprint()).unwrap();
    assert!(!drifted.is_tracked());

    // Re-applying with the cleared fingerprint adopts the new value.
    let reapplied = engine
        .create_or_update(dir.path(), drifted.fingerprint())
        .unwrap();
    assert!(reapplied.is_tracked());
    assert_ne!(reapplied.fingerprint(), created.fingerprint());
}

#[test]
fn renaming_without_reordering_preserves_the_fingerprint() {
    let cluster = Arc::new(FakeCluster::with_selflinks(&["/v1/a"]));
    let engine = engine(&cluster);

    let before = ManifestDir::new()
        .file("a.yaml", "alpha")
        .file("b.yaml", "beta");
    let after = ManifestDir::new()
        .file("aa.yaml", "alpha")
        .file("b.yaml", "beta");

    let fp_before = engine.refresh(before.path(), "").unwrap();
    let fp_after = engine.refresh(after.path(), "").unwrap();
    assert_eq!(fp_before.fingerprint(), fp_after.fingerprint());
}

#[test]
fn inserting_an_earlier_sorting_file_changes_the_fingerprint() {
    let cluster = Arc::new(FakeCluster::with_selflinks(&["/v1/a"]));
    let engine = engine(&cluster);

    let dir = ManifestDir::new().file("b.yaml", "beta");
    let original = engine.refresh(dir.path(), "").unwrap();

    let dir = dir.file("a.yaml", "alpha");
    let changed = engine.refresh(dir.path(), "").unwrap();
    assert_ne!(original.fingerprint(), changed.fingerprint());
}
