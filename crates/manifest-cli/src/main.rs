//! Manifest Sync CLI
//!
//! The command-line interface for reconciling manifest directories against a
//! live cluster through kubectl.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use manifest_kubectl::ConnectionContext;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mut context = ConnectionContext::new();
    if let Some(kubeconfig) = &cli.kubeconfig {
        context = context.with_kubeconfig(kubeconfig);
    }
    if let Some(namespace) = &cli.namespace {
        context = context.with_namespace(namespace);
    }
    if let Some(kubectl) = &cli.kubectl {
        context = context.with_binary(kubectl);
    }

    match cli.command {
        Commands::Apply { dir, fingerprint } => commands::run_apply(context, &dir, &fingerprint),
        Commands::Refresh { dir, fingerprint } => {
            commands::run_refresh(context, &dir, &fingerprint)
        }
        Commands::Destroy { dir } => commands::run_destroy(context, &dir),
        Commands::Hash { dir } => commands::run_hash(&dir),
    }
}
