//! appdeploy - sync a local app directory to a Databricks workspace and deploy it
//!
//! The deploy procedure is four blocking calls to the `databricks` CLI:
//! `auth describe` to find the current user, `sync --full` to mirror the
//! source directory into `/Workspace/Users/<user>/databricks-apps-scratchpad/<app>`,
//! `apps deploy` from that path, and `apps get` to report status.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::deploy::{DeployOptions, DeployReport, DeployUseCase, StepReport};
pub use config::{Config, ConfigWarning};
pub use domain::ports::{
    Capture, CommandOutput, CommandRunner, CommandSpec, DeployEvent, DeployEventSink,
    NoopEventSink,
};
pub use domain::services::{parse_user_id, DatabricksCli};
pub use domain::value_objects::{AppName, OnError, Step, UserId, WorkspacePath, MAX_APP_NAME_LEN};
pub use error::{AppDeployError, AppDeployResult};
pub use infrastructure::{ConsoleEventSink, JsonEventSink, ProcessRunner};
