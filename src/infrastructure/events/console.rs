//! Console Event Sink
//!
//! Human-readable progress for interactive runs. Status output of the
//! platform is passed through verbatim.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::Step;

mod icons {
    pub const DEPLOY: &str = "📦";
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
}

/// Event sink that prints progress to stdout and failures to stderr
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn new(color: bool, verbose: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color, verbose)
    }

    /// Create a console sink over custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E, color: bool, verbose: bool) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
            verbose,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn print(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = write!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn println(&self, text: &str) {
        self.print(&format!("{}\n", text));
    }

    fn eprint(&self, text: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = write!(err, "{}", text);
            let _ = err.flush();
        }
    }

    fn eprintln(&self, text: &str) {
        self.eprint(&format!("{}\n", text));
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                app,
                source,
                dry_run,
            } => {
                self.println(&format!("{} Deploying {}", icons::DEPLOY, app));
                self.println(&format!("Source: {}", source.display()));
                if dry_run {
                    self.println("Mode: Dry run");
                }
                self.println("");
            }

            DeployEvent::IdentityResolved { user } => {
                self.println(&format!(
                    "{} Authenticated as {}",
                    self.paint(icons::SUCCESS, Color::Green),
                    user
                ));
            }

            DeployEvent::PathComposed { path } => {
                self.println(&format!(
                    "{} Workspace path: {}",
                    self.paint(icons::SUCCESS, Color::Green),
                    path
                ));
            }

            DeployEvent::StepStarted { step, command } => {
                if step == Step::Identity && !self.verbose {
                    return;
                }
                self.println(&format!(
                    "{} {}: {}",
                    self.paint(icons::PROGRESS, Color::Cyan),
                    step,
                    self.paint(&command, Color::DarkGrey)
                ));
            }

            DeployEvent::StepFinished {
                step,
                exit_code,
                stdout: _,
                stderr,
            } => {
                if exit_code == 0 {
                    if step == Step::Deploy {
                        self.println(&format!(
                            "{} Deployment submitted",
                            self.paint(icons::SUCCESS, Color::Green)
                        ));
                    }
                    return;
                }
                self.eprintln(&format!(
                    "{} {} failed (exit code {})",
                    self.paint(icons::ERROR, Color::Red),
                    step,
                    exit_code
                ));
                // Status stderr is passed through by the `Status` event.
                if step != Step::Status && !stderr.trim().is_empty() {
                    self.eprint(&stderr);
                    if !stderr.ends_with('\n') {
                        self.eprintln("");
                    }
                }
            }

            DeployEvent::StepSkipped { step, command } => {
                self.println(&format!(
                    "{} {} skipped: {}",
                    self.paint(icons::PENDING, Color::DarkGrey),
                    step,
                    self.paint(&command, Color::DarkGrey)
                ));
            }

            DeployEvent::Synced {
                source,
                destination,
            } => {
                self.println(&format!(
                    "{} Synced {} to {}",
                    self.paint(icons::SUCCESS, Color::Green),
                    source.display(),
                    destination
                ));
            }

            DeployEvent::Planned { files } => {
                if files.is_empty() {
                    self.println("No files to sync");
                    return;
                }
                self.println(&format!("Files to sync ({}):", files.len()));
                for path in &files {
                    self.println(&format!("  + {}", path.display()));
                }
            }

            DeployEvent::Status { stdout, stderr } => {
                self.print(&stdout);
                self.eprint(&stderr);
            }

            DeployEvent::Completed {
                exit_code,
                failed_steps,
                dry_run,
            } => {
                if dry_run {
                    self.println("");
                    self.println("Dry run complete - nothing was synced or deployed.");
                } else if !failed_steps.is_empty() {
                    let names: Vec<&str> = failed_steps.iter().map(Step::as_str).collect();
                    self.eprintln(&format!(
                        "{} Finished with failed steps: {} (exit code {})",
                        self.paint(icons::WARNING, Color::Yellow),
                        names.join(", "),
                        exit_code
                    ));
                }
            }
        }
    }
}
