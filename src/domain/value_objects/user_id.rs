//! Current user identifier, as reported by the CLI's auth description.

use std::fmt;

/// Identifier of the authenticated workspace user (usually an email address).
///
/// May be empty: parsing never fails, callers decide whether to guard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
