//! SyncEngine: the operation surface for the state-tracking layer
//!
//! Wraps a [`Cluster`] behind the three public operations. Each call is
//! synchronous and stateless; the caller owns the stored fingerprint and
//! passes it back in.

use std::path::Path;

use crate::error::Result;
use crate::reconcile::{Reconciliation, reconcile};
use manifest_kubectl::Cluster;

/// Engine driving apply/query/delete against one cluster connection.
pub struct SyncEngine {
    cluster: Box<dyn Cluster>,
}

impl SyncEngine {
    pub fn new(cluster: Box<dyn Cluster>) -> Self {
        Self { cluster }
    }

    /// Apply the manifests at `dir`, then reconcile.
    ///
    /// `previous` is the caller's stored fingerprint — empty on create,
    /// populated on update.
    ///
    /// # Errors
    ///
    /// An apply failure aborts before reconciliation; the manifest directory
    /// remains the source of truth and the caller must re-drive.
    pub fn create_or_update(&self, dir: &Path, previous: &str) -> Result<Reconciliation> {
        tracing::debug!(dir = %dir.display(), "Applying manifests");
        self.cluster.apply(dir)?;
        reconcile(previous, dir, self.cluster.as_ref())
    }

    /// Reconcile without applying — the read/refresh path.
    pub fn refresh(&self, dir: &Path, previous: &str) -> Result<Reconciliation> {
        reconcile(previous, dir, self.cluster.as_ref())
    }

    /// Delete the resources described at `dir`.
    ///
    /// # Errors
    ///
    /// A delete failure is surfaced as-is; no rollback or retry.
    pub fn destroy(&self, dir: &Path) -> Result<()> {
        tracing::debug!(dir = %dir.display(), "Deleting manifests");
        self.cluster.delete(dir)?;
        Ok(())
    }
}
