//! Engine lifecycle against a real subprocess: a stub `kubectl` shell
//! script that persists applied state in a scratch file, so apply, query,
//! and delete interact the way the real tool does.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use manifest_core::{Reconciliation, ResetReason, SyncEngine};
use manifest_kubectl::{ConnectionContext, KubectlCluster};
use manifest_test_utils::ManifestDir;
use pretty_assertions::assert_eq;

/// Stub kubectl: `apply` creates a state file, `delete` removes it, and
/// `get` prints one item per line of the state file (or nothing when the
/// state file is absent).
fn stateful_stub(dir: &Path, state: &Path) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
STATE='{state}'
case "$1" in
apply)
    printf '/v1/ns/default/a\n' > "$STATE"
    ;;
delete)
    rm -f "$STATE"
    ;;
get)
    if [ -f "$STATE" ]; then
        printf '{{"items":[{{"metadata":{{"selflink":"/v1/ns/default/a"}}}}]}}\n'
    fi
    ;;
esac
"#,
        state = state.display()
    );

    let path = dir.join("kubectl");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn lifecycle_through_a_real_subprocess() {
    let scratch = tempfile::tempdir().unwrap();
    let state = scratch.path().join("cluster-state");
    let kubectl = stateful_stub(scratch.path(), &state);

    let manifests = ManifestDir::new().file("a.txt", "hello");
    let context = ConnectionContext::new().with_binary(kubectl);
    let engine = SyncEngine::new(Box::new(KubectlCluster::new(context)));

    // Before any apply, nothing matches live.
    let initial = engine.refresh(manifests.path(), "").unwrap();
    assert_eq!(
        initial,
        Reconciliation::Reset {
            reason: ResetReason::NoLiveResources
        }
    );

    // Apply converges the stub cluster; the known vector fingerprint comes
    // back.
    let created = engine.create_or_update(manifests.path(), "").unwrap();
    assert_eq!(
        created.fingerprint(),
        "19185fa59780c89e966824a04d9199def308f7dd"
    );

    // A refresh with the stored fingerprint confirms stability.
    let refreshed = engine
        .refresh(manifests.path(), created.fingerprint())
        .unwrap();
    assert_eq!(created, refreshed);

    // Destroy empties the cluster; the next refresh resets.
    engine.destroy(manifests.path()).unwrap();
    let after_destroy = engine
        .refresh(manifests.path(), created.fingerprint())
        .unwrap();
    assert_eq!(
        after_destroy,
        Reconciliation::Reset {
            reason: ResetReason::NoLiveResources
        }
    );
}
