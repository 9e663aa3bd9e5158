//! Application name value object
//!
//! The platform limits app names to 30 characters of lowercase letters,
//! digits and hyphens.

use std::fmt;

use crate::error::{AppDeployError, AppDeployResult};

/// App deployed when nothing else is configured
pub const DEFAULT_APP_NAME: &str = "chatdatabricks-langchain";

/// Platform limit on app name length
pub const MAX_APP_NAME_LEN: usize = 30;

/// A validated application name.
///
/// Constructed once per run; the same value is used for the workspace path,
/// the deploy command and the status query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: impl Into<String>) -> AppDeployResult<Self> {
        let name = name.into();
        let reject = |reason: &str| AppDeployError::InvalidAppName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(reject("must not be empty"));
        }
        if name.chars().count() > MAX_APP_NAME_LEN {
            return Err(reject(&format!(
                "must be at most {} characters",
                MAX_APP_NAME_LEN
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(reject(
                "may only contain lowercase letters, digits and hyphens",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AppName {
    fn default() -> Self {
        Self(DEFAULT_APP_NAME.to_string())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
