//! Shared test utilities for the manifest-sync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! - [`ManifestDir`] — temp-directory builder for manifest trees
//! - [`FakeCluster`] — scripted [`Cluster`] implementation with call
//!   recording and failure injection

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use manifest_kubectl::{Cluster, Error, Result};
use tempfile::TempDir;

/// Temporary manifest directory with a fluent file builder.
///
/// The directory is deleted when the value is dropped.
pub struct ManifestDir {
    dir: TempDir,
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp manifest dir"),
        }
    }

    /// Write a file under the directory, creating parent directories for
    /// nested relative paths.
    pub fn file(self, relative: impl AsRef<Path>, content: &str) -> Self {
        let path = self.dir.path().join(relative.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("failed to write manifest file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// One recorded cluster call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Apply(PathBuf),
    Delete(PathBuf),
    Query(PathBuf),
}

/// What the fake returns for each operation.
#[derive(Debug, Clone)]
enum Script {
    /// Query answers with this body (`None` = nothing live); apply/delete
    /// succeed.
    Respond(Option<String>),
    FailApply(String),
    FailDelete(String),
    FailQuery(String),
}

/// Scripted [`Cluster`] implementation for tests.
///
/// Records every call; the query body can be swapped between calls to
/// simulate live-state changes.
pub struct FakeCluster {
    script: Mutex<Script>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCluster {
    fn with_script(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Cluster with no matching live resources (the absence sentinel).
    pub fn empty() -> Self {
        Self::with_script(Script::Respond(None))
    }

    /// Cluster that answers queries with a raw JSON body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_script(Script::Respond(Some(body.into())))
    }

    /// Cluster that answers queries with an items list carrying these
    /// selflinks.
    pub fn with_selflinks(links: &[&str]) -> Self {
        Self::with_body(items_body(links))
    }

    /// Cluster whose `apply` fails with this stderr text.
    pub fn failing_apply(stderr: impl Into<String>) -> Self {
        Self::with_script(Script::FailApply(stderr.into()))
    }

    /// Cluster whose `delete` fails with this stderr text.
    pub fn failing_delete(stderr: impl Into<String>) -> Self {
        Self::with_script(Script::FailDelete(stderr.into()))
    }

    /// Cluster whose `query` fails with this stderr text.
    pub fn failing_query(stderr: impl Into<String>) -> Self {
        Self::with_script(Script::FailQuery(stderr.into()))
    }

    /// Replace the query response, simulating live-state change between
    /// reconciliations.
    pub fn set_selflinks(&self, links: &[&str]) {
        *self.script.lock().unwrap() = Script::Respond(Some(items_body(links)));
    }

    /// Make subsequent queries report nothing live.
    pub fn set_empty(&self) {
        *self.script.lock().unwrap() = Script::Respond(None);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn script(&self) -> Script {
        self.script.lock().unwrap().clone()
    }
}

fn items_body(links: &[&str]) -> String {
    let items: Vec<serde_json::Value> = links
        .iter()
        .map(|link| serde_json::json!({ "metadata": { "selflink": link } }))
        .collect();
    serde_json::json!({ "items": items }).to_string()
}

impl Cluster for FakeCluster {
    fn apply(&self, dir: &Path) -> Result<()> {
        self.record(Call::Apply(dir.to_path_buf()));
        match self.script() {
            Script::FailApply(stderr) => Err(Error::Apply {
                command: format!("kubectl apply -f {}", dir.display()),
                exit_code: Some(1),
                stderr,
            }),
            _ => Ok(()),
        }
    }

    fn delete(&self, dir: &Path) -> Result<()> {
        self.record(Call::Delete(dir.to_path_buf()));
        match self.script() {
            Script::FailDelete(stderr) => Err(Error::Delete {
                command: format!("kubectl delete -f {}", dir.display()),
                exit_code: Some(1),
                stderr,
            }),
            _ => Ok(()),
        }
    }

    fn query(&self, dir: &Path) -> Result<Option<String>> {
        self.record(Call::Query(dir.to_path_buf()));
        match self.script() {
            Script::Respond(body) => Ok(body),
            Script::FailQuery(stderr) => Err(Error::Query {
                command: format!("kubectl get --ignore-not-found -f {} -o json", dir.display()),
                exit_code: Some(1),
                stderr,
            }),
            // Mutate failures leave queries working.
            Script::FailApply(_) | Script::FailDelete(_) => Ok(None),
        }
    }
}
