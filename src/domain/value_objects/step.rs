//! Deploy steps, in execution order.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Resolve the authenticated user
    Identity,
    /// Full sync of the source directory to the workspace path
    Sync,
    /// Trigger the app deployment
    Deploy,
    /// Query app status
    Status,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Identity, Step::Sync, Step::Deploy, Step::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Identity => "identity",
            Step::Sync => "sync",
            Step::Deploy => "deploy",
            Step::Status => "status",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
