//! appdeploy CLI
//!
//! Usage: appdeploy [COMMAND]
//!
//! Commands:
//!   deploy  Sync files, deploy the app and show its status (default)
//!   whoami  Print the authenticated workspace user
//!   path    Print the workspace path the app is synced to
//!   status  Show the app's status

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    appdeploy::logging::init(cli.verbose)?;

    let code = commands::dispatch(&cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
