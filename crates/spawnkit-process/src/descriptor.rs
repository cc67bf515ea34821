//! Process descriptor

use std::collections::BTreeMap;

use spawnkit_fs::{Directory, File};

/// Immutable specification of one process launch
///
/// A descriptor is built once per invocation, never mutated afterwards, and
/// travels with every outcome produced from it — errors always carry the
/// descriptor that caused them. Constructing a descriptor performs no IO and
/// spawns nothing.
///
/// Comparison, ordering, and hashing are structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessDescriptor {
    /// Program to launch; resolved by the OS (via `PATH` when not absolute)
    pub command: File,
    /// Ordered argument list
    pub args: Vec<String>,
    /// Working directory (None = inherit the parent's)
    pub working_dir: Option<Directory>,
    /// Environment override (None = inherit the parent environment exactly;
    /// Some = replace the child environment wholesale with this map)
    pub env: Option<BTreeMap<String, String>>,
}

impl ProcessDescriptor {
    /// Create a descriptor for a command with no arguments
    pub fn new(command: File) -> Self {
        Self {
            command,
            args: vec![],
            working_dir: None,
            env: None,
        }
    }

    /// Set the argument list
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the working directory
    pub fn working_dir(mut self, dir: Directory) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Replace the child environment wholesale
    ///
    /// Without this call the child inherits the parent environment exactly.
    pub fn env_override(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }
}
