//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manifest Sync - Reconcile manifest directories against a live cluster
#[derive(Parser, Debug)]
#[command(name = "manifest-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the kubeconfig file
    #[arg(long, global = true, env = "KUBECONFIG")]
    pub kubeconfig: Option<PathBuf>,

    /// Namespace to operate in
    #[arg(short = 'n', long, global = true)]
    pub namespace: Option<String>,

    /// Path to the kubectl binary (defaults to kubectl on PATH)
    #[arg(long, global = true)]
    pub kubectl: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply a manifest directory and print its new fingerprint
    ///
    /// Runs `kubectl apply -f <dir>`, then reconciles. The tracked
    /// fingerprint goes to stdout; a reset prints nothing to stdout and
    /// explains why on stderr.
    Apply {
        /// Manifest directory to apply
        dir: PathBuf,

        /// Fingerprint from the last successful reconciliation
        #[arg(long, default_value = "")]
        fingerprint: String,
    },

    /// Reconcile without applying and print the fingerprint
    Refresh {
        /// Manifest directory to check
        dir: PathBuf,

        /// Fingerprint from the last successful reconciliation
        #[arg(long, default_value = "")]
        fingerprint: String,
    },

    /// Delete the resources described by a manifest directory
    Destroy {
        /// Manifest directory to delete
        dir: PathBuf,
    },

    /// Print the content digest of a manifest directory
    Hash {
        /// Manifest directory to hash
        dir: PathBuf,
    },
}
