//! Deploy Use Case
//!
//! Orchestrates the deploy flow:
//! 1. Resolve the current user from `auth describe`
//! 2. Compose the workspace path
//! 3. Full sync of the source directory to that path
//! 4. Deploy the app from that path, then query its status
//!
//! Steps run strictly in order. Nothing is retried or rolled back; a failing
//! step is either recorded (`OnError::Continue`) or halts the run
//! (`OnError::Stop`).

use crate::domain::ports::{
    Capture, CommandOutput, CommandRunner, CommandSpec, DeployEvent, DeployEventSink,
};
use crate::domain::services::{parse_user_id, DatabricksCli};
use crate::domain::value_objects::{AppName, OnError, Step, UserId, WorkspacePath};
use crate::error::{AppDeployError, AppDeployResult};
use crate::infrastructure::list_sync_files;

use super::options::DeployOptions;
use super::result::DeployReport;

/// Deploy use case - orchestrates the deploy flow
///
/// Parameterized by its command runner so tests can script the external CLI.
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
    cli: DatabricksCli,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R, cli: DatabricksCli) -> Self {
        Self { runner, cli }
    }

    /// Fail early with a clear message if the CLI cannot be started
    pub fn preflight(&self) -> AppDeployResult<()> {
        if self.runner.is_available(self.cli.program()) {
            Ok(())
        } else {
            Err(AppDeployError::CliUnavailable {
                program: self.cli.program().to_string(),
            })
        }
    }

    /// Step 1 on its own
    pub fn resolve_identity(&self) -> AppDeployResult<UserId> {
        let command = self.cli.auth_describe();
        let output = self.runner.run(&command, Capture::Piped)?;
        identity_from(&command, &output)
    }

    /// Steps 1 and 2 on their own
    pub fn workspace_path(&self, app: &AppName) -> AppDeployResult<(UserId, WorkspacePath)> {
        let user = self.resolve_identity()?;
        let path = WorkspacePath::compose(&user, app);
        Ok((user, path))
    }

    /// Status query on its own; output is captured for verbatim display
    pub fn status(&self, app: &AppName) -> AppDeployResult<CommandOutput> {
        Ok(self.runner.run(&self.cli.apps_get(app), Capture::Piped)?)
    }

    /// Execute the full procedure, reporting progress to `events`
    pub fn execute(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> AppDeployResult<DeployReport> {
        events.on_event(DeployEvent::Started {
            app: options.app.to_string(),
            source: options.source.clone(),
            dry_run: options.dry_run,
        });

        if options.preflight {
            self.preflight()?;
        }

        let identity_cmd = self.cli.auth_describe();
        let identity = self.run_step(Step::Identity, &identity_cmd, Capture::Piped, events)?;
        let user = identity_from(&identity_cmd, &identity)?;
        events.on_event(DeployEvent::IdentityResolved {
            user: user.to_string(),
        });

        let path = WorkspacePath::compose(&user, &options.app);
        events.on_event(DeployEvent::PathComposed {
            path: path.to_string(),
        });
        tracing::info!(user = %user, path = %path, "workspace path composed");

        let mut report =
            DeployReport::new(options.app.clone(), user, path.clone(), options.dry_run);
        report.record(
            Step::Identity,
            identity_cmd.to_string(),
            Some(identity.exit_code()),
        );

        let pending = [
            (Step::Sync, self.cli.sync_full(&options.source, &path)),
            (Step::Deploy, self.cli.apps_deploy(&options.app, &path)),
            (Step::Status, self.cli.apps_get(&options.app)),
        ];

        if options.dry_run {
            let files = list_sync_files(&options.source)?;
            events.on_event(DeployEvent::Planned {
                files: files.clone(),
            });
            report.planned_files = files;
            for (step, command) in &pending {
                skip(step, command, &mut report, events);
            }
            return Ok(complete(report, events));
        }

        let mut halted = false;
        for (step, command) in &pending {
            if halted {
                skip(step, command, &mut report, events);
                continue;
            }

            // Status is always captured so it can be shown verbatim and recorded.
            let capture = match step {
                Step::Status => Capture::Piped,
                _ => options.step_output,
            };
            let output = self.run_step(*step, command, capture, events)?;
            let succeeded = output.success();
            let code = output.exit_code();
            report.record(*step, command.to_string(), Some(code));

            match step {
                Step::Sync if succeeded => {
                    events.on_event(DeployEvent::Synced {
                        source: options.source.clone(),
                        destination: path.to_string(),
                    });
                }
                Step::Status => {
                    report.status_output = Some(output.stdout.clone());
                    events.on_event(DeployEvent::Status {
                        stdout: output.stdout,
                        stderr: output.stderr,
                    });
                }
                _ => {}
            }

            if !succeeded && options.on_error == OnError::Stop {
                tracing::warn!(step = %step, code, "halting after failed step");
                halted = true;
            }
        }

        Ok(complete(report, events))
    }

    fn run_step(
        &self,
        step: Step,
        command: &CommandSpec,
        capture: Capture,
        events: &dyn DeployEventSink,
    ) -> AppDeployResult<CommandOutput> {
        events.on_event(DeployEvent::StepStarted {
            step,
            command: command.to_string(),
        });
        let output = self.runner.run(command, capture)?;
        events.on_event(DeployEvent::StepFinished {
            step,
            exit_code: output.exit_code(),
            stdout: output.stdout.clone(),
            stderr: output.stderr.clone(),
        });
        Ok(output)
    }
}

fn identity_from(command: &CommandSpec, output: &CommandOutput) -> AppDeployResult<UserId> {
    let user = parse_user_id(&output.stdout);
    if user.is_empty() {
        return Err(AppDeployError::IdentityNotFound {
            command: command.to_string(),
            detail: output.stderr.clone(),
        });
    }
    Ok(user)
}

fn skip(
    step: &Step,
    command: &CommandSpec,
    report: &mut DeployReport,
    events: &dyn DeployEventSink,
) {
    events.on_event(DeployEvent::StepSkipped {
        step: *step,
        command: command.to_string(),
    });
    report.record(*step, command.to_string(), None);
}

fn complete(report: DeployReport, events: &dyn DeployEventSink) -> DeployReport {
    events.on_event(DeployEvent::Completed {
        exit_code: report.exit_code(),
        failed_steps: report.failed_steps(),
        dry_run: report.dry_run,
    });
    report
}
