//! Command Runner Port
//!
//! Abstracts running an external program so the deploy flow can be
//! exercised without a real Databricks CLI.

use std::fmt;

/// A program invocation: executable name plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    /// Renders a copy-pasteable command line (single-quoting where needed).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=+,%".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// Where the child's stdout/stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Stream straight to the user's terminal
    Inherit,
    /// Collect into `CommandOutput`
    Piped,
}

/// Exit status and (when piped) captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code as a shell would report it; signals map to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

/// Error starting an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Program not found on PATH
    NotFound { program: String },
    /// Any other spawn or wait failure
    Spawn { program: String, message: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { program } => write!(f, "{}: command not found", program),
            Self::Spawn { program, message } => write!(f, "{}: {}", program, message),
        }
    }
}

impl std::error::Error for RunError {}

impl From<RunError> for crate::error::AppDeployError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::NotFound { program } => Self::CliUnavailable { program },
            RunError::Spawn { program, message } => Self::Spawn { program, message },
        }
    }
}

/// Trait for running external commands
pub trait CommandRunner {
    /// Run to completion, blocking until the process exits
    fn run(&self, spec: &CommandSpec, capture: Capture) -> Result<CommandOutput, RunError>;

    /// Check whether `program` can be started at all
    fn is_available(&self, program: &str) -> bool;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec, capture: Capture) -> Result<CommandOutput, RunError> {
        (**self).run(spec, capture)
    }

    fn is_available(&self, program: &str) -> bool {
        (**self).is_available(program)
    }
}
