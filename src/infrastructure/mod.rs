//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - `CommandRunner` backed by `std::process::Command`
//! - `source_files` - gitignore-aware listing of the directory to sync
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod process;
pub mod source_files;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::ProcessRunner;
pub use source_files::list_sync_files;
