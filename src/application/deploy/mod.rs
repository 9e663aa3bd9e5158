//! Deploy Module
//!
//! Runs the four-step deploy procedure: resolve identity, compose the
//! workspace path, full sync, then deploy and report status.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `StepReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use appdeploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(ProcessRunner, DatabricksCli::default());
//! let report = use_case.execute(&DeployOptions::default(), &NoopEventSink)?;
//! std::process::exit(report.exit_code());
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, StepReport};
pub use use_case::DeployUseCase;
