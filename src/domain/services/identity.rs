//! Identity parsing for `databricks auth describe` output.

use crate::domain::value_objects::UserId;

/// Label of the line carrying the user identifier
pub const USER_LABEL: &str = "User:";

/// Extract the user identifier from `auth describe` text.
///
/// Takes the first line that begins with `User:` and returns the token that
/// follows the label. Indented lines (nested entries of another section)
/// do not count. Returns an empty id when no such line exists.
pub fn parse_user_id(output: &str) -> UserId {
    output
        .lines()
        .find_map(|line| line.strip_prefix(USER_LABEL))
        .and_then(|rest| rest.split_whitespace().next())
        .map(UserId::new)
        .unwrap_or_default()
}
