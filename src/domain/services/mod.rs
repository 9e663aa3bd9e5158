//! Domain Services
//!
//! Pure logic with no I/O: parsing the CLI's auth output and building the
//! command lines for each deploy step.

mod databricks_cli;
mod identity;

pub use databricks_cli::{DatabricksCli, DEFAULT_CLI_PROGRAM};
pub use identity::{parse_user_id, USER_LABEL};
