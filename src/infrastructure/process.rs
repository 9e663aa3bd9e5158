//! Process Runner
//!
//! Runs external commands synchronously; each call blocks until the child exits.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{Capture, CommandOutput, CommandRunner, CommandSpec, RunError};

/// `CommandRunner` backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Check if `program` can be spawned (`<program> --version`).
    ///
    /// Only spawnability counts; the exit status of `--version` is ignored.
    pub fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

fn run_error(spec: &CommandSpec, err: io::Error) -> RunError {
    if err.kind() == io::ErrorKind::NotFound {
        RunError::NotFound {
            program: spec.program.clone(),
        }
    } else {
        RunError::Spawn {
            program: spec.program.clone(),
            message: err.to_string(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec, capture: Capture) -> Result<CommandOutput, RunError> {
        tracing::debug!(program = %spec.program, args = ?spec.args, ?capture, "running command");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        let output = match capture {
            Capture::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit()) // auth flows may prompt
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| run_error(spec, e))?;
                CommandOutput {
                    code: status.code(),
                    stdout: String::new(),
                    stderr: String::new(),
                }
            }
            Capture::Piped => {
                let output = cmd
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| run_error(spec, e))?;
                CommandOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
        };

        tracing::debug!(program = %spec.program, code = ?output.code, "command exited");
        Ok(output)
    }

    fn is_available(&self, program: &str) -> bool {
        Self::check_available(program)
    }
}
