//! Common test utilities for appdeploy CLI tests.
//!
//! `TestEnv` runs the built binary against a fake `databricks` script placed
//! first on PATH. The script records every invocation (one line of arguments
//! per call) and its behaviour is switched with `FAKE_*` environment variables.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use tempfile::TempDir;

pub const ALICE_PATH: &str =
    "/Workspace/Users/alice/databricks-apps-scratchpad/chatdatabricks-langchain";

const FAKE_DATABRICKS: &str = r##"#!/bin/sh
if [ -n "$FAKE_DATABRICKS_LOG" ]; then
  printf '%s\n' "$*" >> "$FAKE_DATABRICKS_LOG"
fi

case "$1" in
  --version)
    echo "Databricks CLI v0.229.0"
    exit 0
    ;;
  auth)
    echo "Host: https://example.cloud.databricks.com"
    if [ -n "$FAKE_NO_USER" ]; then
      echo "Error: default auth: cannot configure default credentials" >&2
      exit 1
    fi
    echo "User: ${FAKE_USER:-alice}"
    echo "Authenticated with: pat"
    exit 0
    ;;
  sync)
    if [ "${FAKE_SYNC_EXIT:-0}" != "0" ]; then
      echo "Error: sync failed" >&2
      exit "$FAKE_SYNC_EXIT"
    fi
    echo "Initial Sync Complete"
    exit 0
    ;;
  apps)
    case "$2" in
      deploy)
        if [ "${FAKE_DEPLOY_EXIT:-0}" != "0" ]; then
          echo "Error: App with name $3 does not exist or is deleted." >&2
          exit "$FAKE_DEPLOY_EXIT"
        fi
        echo "{\"deployment_id\": \"01ef\", \"status\": {\"state\": \"SUCCEEDED\"}}"
        exit 0
        ;;
      get)
        echo "{\"name\": \"$3\", \"app_status\": {\"state\": \"RUNNING\"}}"
        exit "${FAKE_STATUS_EXIT:-0}"
        ;;
    esac
    ;;
esac

echo "unexpected arguments: $*" >&2
exit 2
"##;

/// Directory holding the fake CLI, written once per test binary.
///
/// Sharing one script avoids writing an executable while other test threads
/// are spawning processes.
fn fake_bin_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = tempfile::Builder::new()
            .prefix("appdeploy-fake-cli")
            .tempdir()
            .unwrap();
        let script = dir.path().join("databricks");
        fs::write(&script, FAKE_DATABRICKS).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        dir
    })
    .path()
}

/// Result of running the appdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Isolated project directory, HOME and call log
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().unwrap();
        let home_dir = tempfile::tempdir().unwrap();
        let log = home_dir.path().join("databricks-calls.log");
        Self {
            project_root,
            home_dir,
            log,
        }
    }

    /// A small app directory: two sources, a gitignore and an ignored file
    pub fn with_app_files(self) -> Self {
        self.write("app.py", "print('hello')\n");
        self.write("requirements.txt", "gradio\n");
        self.write(".gitignore", "*.log\n");
        self.write("debug.log", "noise\n");
        self
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![fake_bin_dir().to_path_buf()];
                paths.extend(std::env::split_paths(&existing));
                std::env::join_paths(paths).unwrap()
            }
            None => fake_bin_dir().as_os_str().to_owned(),
        };

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_appdeploy"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("PATH", path)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("FAKE_DATABRICKS_LOG", &self.log)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("APPDEPLOY_APP")
            .env_remove("APPDEPLOY_PROFILE")
            .env_remove("APPDEPLOY_CLI")
            .env_remove("APPDEPLOY_ON_ERROR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute appdeploy");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Arguments of every fake CLI invocation, in order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Invocations other than the preflight `--version` probe
    pub fn step_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c != "--version")
            .collect()
    }
}
