//! Filesystem content hashing for Manifest Sync
//!
//! Provides the deterministic directory digest that anchors the combined
//! fingerprint: every file under a manifest directory contributes its own
//! content hash, in a stable traversal order, and the concatenation is
//! hashed once more.

pub mod digest;
pub mod error;

pub use digest::{hash_bytes, hash_directory, hash_file};
pub use error::{Error, Result};
