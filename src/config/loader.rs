//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::OnError;
use crate::error::{AppDeployError, AppDeployResult};

use super::types::Config;

/// Project config file name, looked up in the source directory
pub const PROJECT_CONFIG_FILE: &str = "appdeploy.toml";

pub const ENV_APP: &str = "APPDEPLOY_APP";
pub const ENV_PROFILE: &str = "APPDEPLOY_PROFILE";
pub const ENV_CLI: &str = "APPDEPLOY_CLI";
pub const ENV_ON_ERROR: &str = "APPDEPLOY_ON_ERROR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File that was read, if any
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AppDeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AppDeployError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User-level config file (`<config_dir>/appdeploy/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("appdeploy").join("config.toml"))
}

/// Resolve the config file and apply environment overrides.
///
/// An explicit path must exist. Otherwise the project file in `source_dir`
/// wins over the user file; with neither, built-in defaults are used.
pub fn load_layered(explicit: Option<&Path>, source_dir: &Path) -> AppDeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppDeployError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = source_dir.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = candidate {
        tracing::debug!(path = %path.display(), "loading config");
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.path = Some(path);
    }

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// Apply environment variable overrides (APPDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_env<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(app) = non_empty(ENV_APP) {
        config.app.name = app.trim().to_string();
    }

    if let Some(profile) = non_empty(ENV_PROFILE) {
        config.cli.profile = Some(profile.trim().to_string());
    }

    if let Some(program) = non_empty(ENV_CLI) {
        config.cli.program = program.trim().to_string();
    }

    if let Some(policy) = non_empty(ENV_ON_ERROR) {
        match policy.parse::<OnError>() {
            Ok(on_error) => config.deploy.on_error = on_error,
            Err(message) => tracing::warn!(var = ENV_ON_ERROR, %message, "ignoring invalid value"),
        }
    }

    config
}

/// Line of an ignored `section.key` path, looked up inside its own table.
///
/// A top-level path may name a whole unknown table, so its `[key]` header
/// also matches.
fn find_line_number(content: &str, ignored_path: &str) -> Option<usize> {
    let (section, key) = ignored_path.rsplit_once('.').unwrap_or(("", ignored_path));

    let mut current = "";
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = table_header(trimmed) {
            if section.is_empty() && header == key {
                return Some(i + 1);
            }
            current = header;
            continue;
        }
        if current == section && assigns_key(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.trim_start_matches('[');
    inner.split(']').next().map(str::trim)
}

fn assigns_key(line: &str, key: &str) -> bool {
    let rest = match line.strip_prefix('"') {
        Some(quoted) => quoted.strip_prefix(key).and_then(|r| r.strip_prefix('"')),
        None => line.strip_prefix(key),
    };
    rest.is_some_and(|r| r.trim_start().starts_with('='))
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app", "name", "cli", "program", "profile", "deploy", "on_error", "source",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
