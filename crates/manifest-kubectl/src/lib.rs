//! kubectl integration for Manifest Sync
//!
//! Wraps the external `kubectl` binary behind the [`Cluster`] trait so the
//! reconciliation core never talks to a subprocess directly. Connection
//! parameters (kubeconfig, namespace, binary override) travel in an
//! immutable [`ConnectionContext`] — never global state.

pub mod cluster;
pub mod context;
pub mod error;

pub use cluster::{Cluster, KubectlCluster};
pub use context::ConnectionContext;
pub use error::{Error, Result};
