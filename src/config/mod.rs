//! Configuration module for appdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APPDEPLOY_*)
//! 3. Project config (appdeploy.toml in the source directory, or --config)
//! 4. User config (~/.config/appdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env, load_layered, load_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, LoadedConfig, ENV_APP, ENV_CLI, ENV_ON_ERROR, ENV_PROFILE,
    PROJECT_CONFIG_FILE,
};
pub use types::{AppConfig, CliConfig, Config, DeployConfig};
