use anyhow::Result;

use appdeploy::{Capture, ConsoleEventSink, DeployEventSink, DeployOptions, JsonEventSink};

use super::{apply_deploy_flags, color_enabled, resolve_config, use_case};
use crate::cli::{Cli, DeployArgs};

pub fn cmd_deploy(cli: &Cli, args: &DeployArgs) -> Result<i32> {
    let mut resolved = resolve_config(cli, args.source.as_deref())?;
    apply_deploy_flags(&mut resolved.config, args);

    let app = resolved.config.app_name()?;
    let options = DeployOptions::new(app)
        .with_source(resolved.source)
        .with_on_error(resolved.config.deploy.on_error)
        .with_dry_run(args.dry_run)
        .with_preflight(!args.skip_preflight)
        // Child output would corrupt the NDJSON stream.
        .with_step_output(if cli.json {
            Capture::Piped
        } else {
            Capture::Inherit
        });

    let sink: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(color_enabled(), cli.verbose > 0))
    };

    let deploy = use_case(&resolved.config.databricks_cli());
    let report = deploy.execute(&options, sink.as_ref())?;
    tracing::debug!(
        exit_code = report.exit_code(),
        failed = report.failed_steps().len(),
        "deploy finished"
    );
    Ok(report.exit_code())
}
