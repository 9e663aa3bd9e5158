//! Workspace path value object
//!
//! The destination of the file sync and the source code path of the deploy:
//! `/Workspace/Users/<user>/databricks-apps-scratchpad/<app>`.

use std::fmt;

use super::{AppName, UserId};

/// Root of per-user home folders in the workspace file tree
pub const WORKSPACE_USERS_ROOT: &str = "/Workspace/Users";

/// Per-user folder that holds synced app sources
pub const SCRATCH_DIR: &str = "databricks-apps-scratchpad";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspacePath(String);

impl WorkspacePath {
    /// Plain concatenation; the user id is neither escaped nor validated.
    pub fn compose(user: &UserId, app: &AppName) -> Self {
        Self(format!(
            "{}/{}/{}/{}",
            WORKSPACE_USERS_ROOT,
            user.as_str(),
            SCRATCH_DIR,
            app.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when a segment is empty, e.g. `/Workspace/Users//...` for an empty user.
    pub fn has_empty_segment(&self) -> bool {
        self.0.contains("//")
    }
}

impl fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
