//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_name;
mod on_error;
mod step;
mod user_id;
mod workspace_path;

pub use app_name::{AppName, DEFAULT_APP_NAME, MAX_APP_NAME_LEN};
pub use on_error::OnError;
pub use step::Step;
pub use user_id::UserId;
pub use workspace_path::{WorkspacePath, SCRATCH_DIR, WORKSPACE_USERS_ROOT};
