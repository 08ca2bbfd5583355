//! Live-resource identity probe
//!
//! Asks the cluster for its current view of the resources a manifest
//! directory describes and folds the server-assigned identity links into one
//! raw string. The empty string is the distinguished "nothing live" sentinel.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use manifest_kubectl::Cluster;

/// Separator appended after every identity link, populated or not.
pub const LINK_SEPARATOR: char = '|';

/// Shape of the query response consumed by the probe.
///
/// Unknown fields are ignored; a missing `selflink` contributes an empty
/// link, still followed by the separator.
#[derive(Debug, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub items: Vec<ResourceRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceRecord {
    #[serde(default)]
    pub metadata: ResourceMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceMetadata {
    #[serde(default)]
    pub selflink: String,
}

/// Query the live identity of the resources described at `dir`.
///
/// Returns the raw identity string: each item's link followed by
/// [`LINK_SEPARATOR`], in response order. An empty query response (nothing
/// matching live) yields the empty string, not an error. The string is
/// deliberately returned un-hashed — the reconciler folds it raw into the
/// combined fingerprint.
///
/// # Errors
///
/// Propagates query failures from the cluster; a response body that is not
/// the expected structure is a parse error with no partial interpretation.
pub fn probe_identity(dir: &Path, cluster: &dyn Cluster) -> Result<String> {
    let Some(body) = cluster.query(dir)? else {
        return Ok(String::new());
    };

    let list: ResourceList = serde_json::from_str(&body)?;

    let mut links = String::new();
    for item in &list.items {
        links.push_str(&item.metadata.selflink);
        links.push(LINK_SEPARATOR);
    }

    tracing::debug!(dir = %dir.display(), items = list.items.len(), "Probed live identity");
    Ok(links)
}
