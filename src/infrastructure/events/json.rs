//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                app,
                source,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "app": app,
                "source": source.display().to_string(),
                "dry_run": dry_run,
            }),

            DeployEvent::IdentityResolved { user } => serde_json::json!({
                "event": "identity",
                "command": "deploy",
                "user": user,
            }),

            DeployEvent::PathComposed { path } => serde_json::json!({
                "event": "workspace_path",
                "command": "deploy",
                "path": path,
            }),

            DeployEvent::StepStarted { step, command } => serde_json::json!({
                "event": "step_start",
                "command": "deploy",
                "step": step,
                "invocation": command,
            }),

            DeployEvent::StepFinished {
                step,
                exit_code,
                stdout,
                stderr,
            } => serde_json::json!({
                "event": "step_finish",
                "command": "deploy",
                "step": step,
                "exit_code": exit_code,
                "success": exit_code == 0,
                "stdout": stdout,
                "stderr": stderr,
            }),

            DeployEvent::StepSkipped { step, command } => serde_json::json!({
                "event": "step_skipped",
                "command": "deploy",
                "step": step,
                "invocation": command,
            }),

            DeployEvent::Synced {
                source,
                destination,
            } => serde_json::json!({
                "event": "synced",
                "command": "deploy",
                "source": source.display().to_string(),
                "destination": destination,
            }),

            DeployEvent::Planned { files } => serde_json::json!({
                "event": "plan",
                "command": "deploy",
                "file_count": files.len(),
                "files": files
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>(),
            }),

            DeployEvent::Status { stdout, stderr } => serde_json::json!({
                "event": "status",
                "command": "deploy",
                "output": stdout,
                "stderr": stderr,
            }),

            DeployEvent::Completed {
                exit_code,
                failed_steps,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "status": if failed_steps.is_empty() { "success" } else { "partial" },
                "exit_code": exit_code,
                "failed_steps": failed_steps,
                "dry_run": dry_run,
                "finished_at": chrono::Utc::now().to_rfc3339(),
            }),
        };

        self.write_event(json);
    }
}
