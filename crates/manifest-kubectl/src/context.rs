//! Connection context for kubectl invocations

use std::path::{Path, PathBuf};

/// Immutable connection parameters shared by every kubectl invocation.
///
/// Built once from configuration and passed by reference into the cluster
/// operations. `binary` defaults to `kubectl` resolved from PATH; overriding
/// it is configuration in the same spirit as `kubeconfig`.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    kubeconfig: Option<PathBuf>,
    namespace: Option<String>,
    binary: PathBuf,
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionContext {
    pub fn new() -> Self {
        Self {
            kubeconfig: None,
            namespace: None,
            binary: PathBuf::from("kubectl"),
        }
    }

    pub fn with_kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.kubeconfig = Some(path.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = path.into();
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Assemble the full argument list for an operation, prepending the
    /// connection flags when configured.
    pub fn args(&self, operation: &[String]) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(namespace) = &self.namespace {
            args.push("-n".to_string());
            args.push(namespace.clone());
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            args.push("--kubeconfig".to_string());
            args.push(kubeconfig.display().to_string());
        }
        args.extend(operation.iter().cloned());
        args
    }

    /// Render the command line for diagnostics.
    pub fn render(&self, args: &[String]) -> String {
        let mut line = self.binary.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
