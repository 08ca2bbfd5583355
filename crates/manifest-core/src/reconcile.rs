//! Fingerprint combination and the drift decision
//!
//! The combined fingerprint binds the manifest directory's content digest to
//! the raw live-identity string: content is hashed-then-combined, identity
//! is combined-then-hashed-once. The asymmetry is a contract — changing it
//! would change every stored fingerprint's stability guarantees.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::probe::probe_identity;
use manifest_kubectl::Cluster;

/// Why a tracked fingerprint was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// No matching resources exist live.
    NoLiveResources,
    /// The freshly computed fingerprint no longer matches the stored one.
    Drifted,
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLiveResources => write!(f, "no matching live resources"),
            Self::Drifted => write!(f, "manifest or live state drifted"),
        }
    }
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// Keep tracking under this fingerprint (first observation, or confirmed
    /// unchanged).
    Tracked { fingerprint: String },
    /// Stop tracking and force re-reconciliation.
    Reset { reason: ResetReason },
}

impl Reconciliation {
    /// The fingerprint to store: the empty string signals a reset, which is
    /// the contract the surrounding state-tracking layer keys off.
    pub fn fingerprint(&self) -> &str {
        match self {
            Self::Tracked { fingerprint } => fingerprint,
            Self::Reset { .. } => "",
        }
    }

    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Tracked { .. })
    }
}

/// Reconcile the manifest directory at `dir` against the live cluster.
///
/// Computes the content digest, probes the live identity, combines them into
/// one fingerprint, and decides:
///
/// 1. nothing live → reset, regardless of `previous` or manifest content
/// 2. `previous` non-empty and different → reset (drift)
/// 3. otherwise → track under the combined fingerprint
///
/// First observation (`previous` empty) and confirmed-unchanged land in the
/// same accept branch deliberately.
///
/// # Errors
///
/// A failure from either leaf aborts the pass; no fingerprint is produced
/// and the caller's stored value is left untouched.
pub fn reconcile(previous: &str, dir: &Path, cluster: &dyn Cluster) -> Result<Reconciliation> {
    let content_digest = manifest_fs::hash_directory(dir)?;
    let raw_identity = probe_identity(dir, cluster)?;

    // Raw identity links, not their digest, feed the final hash.
    let combined = manifest_fs::hash_bytes(format!("{content_digest}{raw_identity}").as_bytes());

    if raw_identity.is_empty() {
        tracing::debug!(dir = %dir.display(), "Resetting fingerprint: nothing live");
        return Ok(Reconciliation::Reset {
            reason: ResetReason::NoLiveResources,
        });
    }

    if !previous.is_empty() && previous != combined {
        tracing::debug!(
            dir = %dir.display(),
            previous,
            %combined,
            "Resetting fingerprint: drift detected"
        );
        return Ok(Reconciliation::Reset {
            reason: ResetReason::Drifted,
        });
    }

    Ok(Reconciliation::Tracked {
        fingerprint: combined,
    })
}
