//! Deploy Event Port
//!
//! Provides an observable interface for the deploy procedure.
//! Enables console progress, NDJSON event streams for CI, and silent runs.

use std::path::PathBuf;

use crate::domain::value_objects::Step;

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Run started
    Started {
        app: String,
        source: PathBuf,
        dry_run: bool,
    },

    /// Current user resolved from `auth describe`
    IdentityResolved { user: String },

    /// Workspace path computed
    PathComposed { path: String },

    /// External command about to run
    StepStarted { step: Step, command: String },

    /// External command exited
    StepFinished {
        step: Step,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// Step not executed (dry run, or halted by `OnError::Stop`)
    StepSkipped { step: Step, command: String },

    /// Sync finished successfully
    Synced { source: PathBuf, destination: String },

    /// Dry run: files the sync would send
    Planned { files: Vec<PathBuf> },

    /// Output of the status query, verbatim
    Status { stdout: String, stderr: String },

    /// Run finished
    Completed {
        exit_code: i32,
        failed_steps: Vec<Step>,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress on the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
