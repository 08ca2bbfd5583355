//! Reconciliation core for Manifest Sync
//!
//! Combines a content digest of a manifest directory with a live-resource
//! identity probe into one collision-resistant fingerprint, and decides from
//! a fingerprint comparison whether the tracked state is absent, unchanged,
//! or drifted:
//!
//! - **probe**: queries the cluster for the live identity of the resources a
//!   manifest directory describes
//! - **reconcile**: the fingerprint combination and the tri-state decision
//! - **engine**: the `create_or_update` / `refresh` / `destroy` surface
//!   exposed to the surrounding state-tracking layer

pub mod engine;
pub mod error;
pub mod probe;
pub mod reconcile;

pub use engine::SyncEngine;
pub use error::{Error, Result};
pub use probe::probe_identity;
pub use reconcile::{Reconciliation, ResetReason, reconcile};
