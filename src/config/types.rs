//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{DatabricksCli, DEFAULT_CLI_PROGRAM};
use crate::domain::value_objects::{AppName, OnError, DEFAULT_APP_NAME};
use crate::error::AppDeployResult;

use super::loader::{self, ConfigWarning};

/// `[app]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

/// `[cli]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default)]
    pub profile: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            profile: None,
        }
    }
}

fn default_program() -> String {
    DEFAULT_CLI_PROGRAM.to_string()
}

/// `[deploy]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub on_error: OnError,

    #[serde(default = "default_source")]
    pub source: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            on_error: OnError::default(),
            source: default_source(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub cli: CliConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> AppDeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Validated application name
    pub fn app_name(&self) -> AppDeployResult<AppName> {
        AppName::new(self.app.name.clone())
    }

    /// CLI command builder for the configured program and profile
    pub fn databricks_cli(&self) -> DatabricksCli {
        DatabricksCli::new(self.cli.program.clone()).with_profile(self.cli.profile.clone())
    }
}
