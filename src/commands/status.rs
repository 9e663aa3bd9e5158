use std::io::Write;

use anyhow::Result;

use super::output::emit_json;
use super::{resolve_config, use_case};
use crate::cli::Cli;

/// Query the app once; output is passed through and so is the exit code.
pub fn cmd_status(cli: &Cli) -> Result<i32> {
    let resolved = resolve_config(cli, None)?;
    let app = resolved.config.app_name()?;
    let output = use_case(&resolved.config.databricks_cli()).status(&app)?;
    let code = output.exit_code();

    if cli.json {
        emit_json(serde_json::json!({
            "event": "status",
            "app": app.as_str(),
            "exit_code": code,
            "stdout": output.stdout,
            "stderr": output.stderr,
        }))?;
    } else {
        let mut out = std::io::stdout().lock();
        out.write_all(output.stdout.as_bytes())?;
        out.flush()?;
        eprint!("{}", output.stderr);
    }
    Ok(code)
}
