//! Domain Layer
//!
//! The deploy procedure's vocabulary, free of process and file-system I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (AppName, UserId, WorkspacePath, Step)
//! - `services/` - Pure logic (identity parsing, CLI command construction)
//! - `ports/` - Interface definitions for infrastructure (command runner, event sinks)

pub mod ports;
pub mod services;
pub mod value_objects;
