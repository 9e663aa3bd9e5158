//! Databricks CLI command construction
//!
//! The only place that knows the argument shapes of the external tool.

use std::path::Path;

use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::{AppName, WorkspacePath};

/// Program invoked when none is configured
pub const DEFAULT_CLI_PROGRAM: &str = "databricks";

/// Builds the `databricks` invocations for each deploy step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabricksCli {
    program: String,
    profile: Option<String>,
}

impl Default for DatabricksCli {
    fn default() -> Self {
        Self::new(DEFAULT_CLI_PROGRAM)
    }
}

impl DatabricksCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            profile: None,
        }
    }

    /// Pass `--profile <name>` to every invocation
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// `auth describe`
    pub fn auth_describe(&self) -> CommandSpec {
        self.command(["auth", "describe"])
    }

    /// `sync --full <source> <workspace path>`
    pub fn sync_full(&self, source: &Path, destination: &WorkspacePath) -> CommandSpec {
        self.command(["sync", "--full"])
            .arg(source.display().to_string())
            .arg(destination.as_str())
    }

    /// `apps deploy <app> --source-code-path <workspace path>`
    pub fn apps_deploy(&self, app: &AppName, source_code_path: &WorkspacePath) -> CommandSpec {
        self.command(["apps", "deploy"])
            .arg(app.as_str())
            .arg("--source-code-path")
            .arg(source_code_path.as_str())
    }

    /// `apps get <app>`
    pub fn apps_get(&self, app: &AppName) -> CommandSpec {
        self.command(["apps", "get"]).arg(app.as_str())
    }

    fn command<const N: usize>(&self, subcommand: [&str; N]) -> CommandSpec {
        let spec = CommandSpec::new(&self.program).args(subcommand);
        match &self.profile {
            Some(profile) => spec.arg("--profile").arg(profile),
            None => spec,
        }
    }
}
