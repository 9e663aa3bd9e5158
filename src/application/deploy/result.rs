//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::domain::value_objects::{AppName, Step, UserId, WorkspacePath};

/// One step's outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    /// Rendered command line
    pub command: String,
    /// `None` when the step did not run
    pub exit_code: Option<i32>,
}

impl StepReport {
    pub fn is_skipped(&self) -> bool {
        self.exit_code.is_none()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.exit_code, Some(code) if code != 0)
    }
}

/// Result of a deploy run
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub app: AppName,
    pub user: UserId,
    pub workspace_path: WorkspacePath,
    /// Steps in execution order, skipped ones included
    pub steps: Vec<StepReport>,
    /// Dry run: files the sync would send
    pub planned_files: Vec<PathBuf>,
    /// Verbatim stdout of the status query, when it ran
    pub status_output: Option<String>,
    pub dry_run: bool,
}

impl DeployReport {
    pub fn new(app: AppName, user: UserId, workspace_path: WorkspacePath, dry_run: bool) -> Self {
        Self {
            app,
            user,
            workspace_path,
            steps: Vec::new(),
            planned_files: Vec::new(),
            status_output: None,
            dry_run,
        }
    }

    pub(crate) fn record(&mut self, step: Step, command: String, exit_code: Option<i32>) {
        self.steps.push(StepReport {
            step,
            command,
            exit_code,
        });
    }

    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// Exit code of the last command that actually ran, 0 if none did.
    ///
    /// Under `OnError::Continue` that is the status query; under
    /// `OnError::Stop` it is the step that halted the run.
    pub fn exit_code(&self) -> i32 {
        self.steps
            .iter()
            .rev()
            .find_map(|s| s.exit_code)
            .unwrap_or(0)
    }

    pub fn failed_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|s| s.is_failure())
            .map(|s| s.step)
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|s| !s.is_failure())
    }
}
