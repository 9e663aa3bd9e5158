//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod deploy_events;

pub use command_runner::{Capture, CommandOutput, CommandRunner, CommandSpec, RunError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
