//! Command handlers for the appdeploy binary

mod deploy;
mod output;
mod path;
mod status;
mod whoami;

use std::path::{Path, PathBuf};

use anyhow::Result;
use is_terminal::IsTerminal;

use appdeploy::config::{load_layered, Config};
use appdeploy::{DatabricksCli, DeployUseCase, ProcessRunner};

use crate::cli::{Cli, Commands, DeployArgs};

/// Run the selected command and return the process exit code
///
/// In JSON mode any failure becomes a final `error` event on stdout and
/// exit code 1, so the stream stays parseable.
pub fn dispatch(cli: &Cli) -> Result<i32> {
    let (name, result) = match &cli.command {
        None => ("deploy", deploy::cmd_deploy(cli, &cli.deploy)),
        Some(Commands::Deploy(args)) => ("deploy", deploy::cmd_deploy(cli, args)),
        Some(Commands::Whoami) => ("whoami", whoami::cmd_whoami(cli)),
        Some(Commands::Path) => ("path", path::cmd_path(cli)),
        Some(Commands::Status) => ("status", status::cmd_status(cli)),
    };

    match result {
        Err(e) if cli.json => {
            output::emit_json(serde_json::json!({
                "event": "error",
                "command": name,
                "message": format!("{:#}", e),
            }))?;
            Ok(1)
        }
        other => other,
    }
}

/// Effective configuration after files, environment and flags are layered
pub(crate) struct Resolved {
    pub config: Config,
    pub source: PathBuf,
}

/// Load config for `source_flag` (project file lives in the source directory)
/// and apply command-line overrides on top.
pub(crate) fn resolve_config(cli: &Cli, source_flag: Option<&Path>) -> Result<Resolved> {
    let lookup_dir = source_flag.unwrap_or_else(|| Path::new("."));
    let loaded = load_layered(cli.config.as_deref(), lookup_dir)?;

    if let Some(path) = &loaded.path {
        if cli.json {
            output::emit_config_warnings(&loaded.warnings)?;
        } else {
            output::print_config_warnings(path, &loaded.warnings);
        }
    }

    let mut config = loaded.config;
    if let Some(app) = &cli.app {
        config.app.name = app.clone();
    }
    if let Some(profile) = &cli.profile {
        config.cli.profile = Some(profile.clone());
    }
    if let Some(program) = &cli.cli_program {
        config.cli.program = program.clone();
    }

    let source = source_flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.deploy.source.clone());

    Ok(Resolved { config, source })
}

pub(crate) fn apply_deploy_flags(config: &mut Config, args: &DeployArgs) {
    if let Some(on_error) = args.on_error {
        config.deploy.on_error = on_error;
    }
}

pub(crate) fn use_case(cli: &DatabricksCli) -> DeployUseCase<ProcessRunner> {
    DeployUseCase::new(ProcessRunner, cli.clone())
}

/// Colors only on an interactive stdout, and never when NO_COLOR is set
pub(crate) fn color_enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
