use anyhow::Result;

use super::output::emit_json;
use super::{resolve_config, use_case};
use crate::cli::Cli;

pub fn cmd_whoami(cli: &Cli) -> Result<i32> {
    let resolved = resolve_config(cli, None)?;
    let user = use_case(&resolved.config.databricks_cli()).resolve_identity()?;

    if cli.json {
        emit_json(serde_json::json!({
            "event": "identity",
            "user": user.as_str(),
        }))?;
    } else {
        println!("{}", user);
    }
    Ok(0)
}
