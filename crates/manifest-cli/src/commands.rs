//! Command implementations

use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use manifest_core::{Reconciliation, SyncEngine};
use manifest_kubectl::{ConnectionContext, KubectlCluster};

fn engine(context: ConnectionContext) -> SyncEngine {
    SyncEngine::new(Box::new(KubectlCluster::new(context)))
}

pub fn run_apply(context: ConnectionContext, dir: &Path, fingerprint: &str) -> Result<()> {
    let outcome = engine(context).create_or_update(dir, fingerprint)?;
    report(outcome);
    Ok(())
}

pub fn run_refresh(context: ConnectionContext, dir: &Path, fingerprint: &str) -> Result<()> {
    let outcome = engine(context).refresh(dir, fingerprint)?;
    report(outcome);
    Ok(())
}

pub fn run_destroy(context: ConnectionContext, dir: &Path) -> Result<()> {
    engine(context).destroy(dir)?;
    eprintln!("{} resources at {} deleted", "ok".green().bold(), dir.display());
    Ok(())
}

pub fn run_hash(dir: &Path) -> Result<()> {
    let digest = manifest_fs::hash_directory(dir)?;
    println!("{digest}");
    Ok(())
}

/// Tracked fingerprints go to stdout for scripting; resets keep stdout empty
/// (the emptiness is the signal) and explain themselves on stderr.
fn report(outcome: Reconciliation) {
    match outcome {
        Reconciliation::Tracked { fingerprint } => println!("{fingerprint}"),
        Reconciliation::Reset { reason } => {
            eprintln!("{} fingerprint reset: {reason}", "note".yellow().bold());
        }
    }
}
