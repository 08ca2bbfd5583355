//! Cluster trait and the kubectl-backed implementation
//!
//! [`Cluster`] is the seam between the reconciliation core and the external
//! management tool: converge a manifest directory, remove it, or query the
//! live view of its resources. [`KubectlCluster`] implements it by running
//! `kubectl` as a subprocess with captured output.

use std::path::Path;
use std::process::{Command, Output};

use crate::context::ConnectionContext;
use crate::error::{Error, Result};

/// Abstract capabilities the reconciliation core consumes.
pub trait Cluster {
    /// Converge the live system to the manifests at `dir`.
    fn apply(&self, dir: &Path) -> Result<()>;

    /// Remove the resources described at `dir`.
    fn delete(&self, dir: &Path) -> Result<()>;

    /// Return the live system's view of the resources matching `dir` as a
    /// raw JSON body, or `None` when nothing matching exists live.
    ///
    /// `None` is the distinguished absence sentinel, not an error.
    fn query(&self, dir: &Path) -> Result<Option<String>>;
}

// Lets callers keep a handle on a cluster while something else owns a boxed
// clone. Lives here because the orphan rule forbids it downstream.
impl<T: Cluster + ?Sized> Cluster for std::sync::Arc<T> {
    fn apply(&self, dir: &Path) -> Result<()> {
        (**self).apply(dir)
    }

    fn delete(&self, dir: &Path) -> Result<()> {
        (**self).delete(dir)
    }

    fn query(&self, dir: &Path) -> Result<Option<String>> {
        (**self).query(dir)
    }
}

/// [`Cluster`] implementation backed by the `kubectl` binary.
pub struct KubectlCluster {
    context: ConnectionContext,
}

impl KubectlCluster {
    pub fn new(context: ConnectionContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ConnectionContext {
        &self.context
    }

    /// Run one kubectl invocation, capturing stdout and stderr.
    fn invoke(&self, operation: &[String]) -> Result<Invocation> {
        let args = self.context.args(operation);
        let command = self.context.render(&args);
        tracing::debug!(%command, "Running kubectl");

        let output = Command::new(self.context.binary())
            .args(&args)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        Ok(Invocation { command, output })
    }
}

/// One completed subprocess run, with the rendered command line kept for
/// diagnostics.
struct Invocation {
    command: String,
    output: Output,
}

impl Invocation {
    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }
}

impl Cluster for KubectlCluster {
    fn apply(&self, dir: &Path) -> Result<()> {
        let operation = operation_args(&["apply", "-f"], dir);
        let invocation = self.invoke(&operation)?;
        if invocation.output.status.success() {
            Ok(())
        } else {
            Err(Error::Apply {
                exit_code: invocation.output.status.code(),
                stderr: invocation.stderr(),
                command: invocation.command,
            })
        }
    }

    fn delete(&self, dir: &Path) -> Result<()> {
        let operation = operation_args(&["delete", "-f"], dir);
        let invocation = self.invoke(&operation)?;
        if invocation.output.status.success() {
            Ok(())
        } else {
            Err(Error::Delete {
                exit_code: invocation.output.status.code(),
                stderr: invocation.stderr(),
                command: invocation.command,
            })
        }
    }

    fn query(&self, dir: &Path) -> Result<Option<String>> {
        let mut operation = operation_args(&["get", "--ignore-not-found", "-f"], dir);
        operation.push("-o".to_string());
        operation.push("json".to_string());

        let invocation = self.invoke(&operation)?;
        if !invocation.output.status.success() {
            return Err(Error::Query {
                exit_code: invocation.output.status.code(),
                stderr: invocation.stderr(),
                command: invocation.command,
            });
        }

        let stdout = invocation.stdout();
        if stdout.trim().is_empty() {
            tracing::debug!(dir = %dir.display(), "No matching live resources");
            Ok(None)
        } else {
            Ok(Some(stdout))
        }
    }
}

fn operation_args(prefix: &[&str], dir: &Path) -> Vec<String> {
    let mut args: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
    args.push(dir.display().to_string());
    args
}
