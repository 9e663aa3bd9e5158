//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::domain::ports::Capture;
use crate::domain::value_objects::{AppName, OnError};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// App to deploy; also the last segment of the workspace path
    pub app: AppName,
    /// Local directory to sync
    pub source: PathBuf,
    /// What to do when sync or deploy exits non-zero
    pub on_error: OnError,
    /// Resolve identity and print the plan, run nothing else
    pub dry_run: bool,
    /// Probe the CLI before the first step
    pub preflight: bool,
    /// Output handling for the sync and deploy commands
    pub step_output: Capture,
}

impl DeployOptions {
    pub fn new(app: AppName) -> Self {
        Self {
            app,
            source: PathBuf::from("."),
            on_error: OnError::default(),
            dry_run: false,
            preflight: true,
            step_output: Capture::Inherit,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_preflight(mut self, preflight: bool) -> Self {
        self.preflight = preflight;
        self
    }

    pub fn with_step_output(mut self, capture: Capture) -> Self {
        self.step_output = capture;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new(AppName::default())
    }
}
