//! What to do when an external step exits non-zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error policy for the sync and deploy steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Record the failure and run the remaining steps (plain shell semantics)
    #[default]
    Continue,
    /// Halt at the first failing step
    Stop,
}

impl OnError {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnError::Continue => "continue",
            OnError::Stop => "stop",
        }
    }
}

impl fmt::Display for OnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "continue" => Ok(OnError::Continue),
            "stop" | "fail-fast" => Ok(OnError::Stop),
            other => Err(format!(
                "unknown error policy '{}' (expected 'continue' or 'stop')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_policies() {
        assert_eq!("continue".parse::<OnError>().unwrap(), OnError::Continue);
        assert_eq!("STOP".parse::<OnError>().unwrap(), OnError::Stop);
        assert_eq!("fail-fast".parse::<OnError>().unwrap(), OnError::Stop);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = "retry".parse::<OnError>().unwrap_err();
        assert!(err.contains("retry"));
    }

    #[test]
    fn default_is_continue() {
        assert_eq!(OnError::default(), OnError::Continue);
    }
}
