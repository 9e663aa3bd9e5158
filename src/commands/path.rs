use anyhow::Result;

use super::output::emit_json;
use super::{resolve_config, use_case};
use crate::cli::Cli;

pub fn cmd_path(cli: &Cli) -> Result<i32> {
    let resolved = resolve_config(cli, None)?;
    let app = resolved.config.app_name()?;
    let (user, path) = use_case(&resolved.config.databricks_cli()).workspace_path(&app)?;

    if cli.json {
        emit_json(serde_json::json!({
            "event": "workspace_path",
            "app": app.as_str(),
            "user": user.as_str(),
            "path": path.as_str(),
        }))?;
    } else {
        println!("{}", path);
    }
    Ok(0)
}
