use std::path::PathBuf;

use appdeploy::OnError;
use clap::{Args, Parser, Subcommand};

/// appdeploy - sync a local directory to your Databricks workspace and deploy it as an App
#[derive(Parser, Debug)]
#[command(name = "appdeploy")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Run 'appdeploy' without a subcommand to sync, deploy and show status.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to appdeploy.toml in the source directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// App name (must already exist in the workspace)
    #[arg(long, global = true)]
    pub app: Option<String>,

    /// Databricks CLI profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Databricks CLI executable
    #[arg(long = "cli", global = true, value_name = "PROGRAM")]
    pub cli_program: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub deploy: DeployArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync files, deploy the app and show its status (default)
    Deploy(DeployArgs),

    /// Print the authenticated workspace user
    Whoami,

    /// Print the workspace path the app is synced to
    Path,

    /// Show the app's status
    Status,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DeployArgs {
    /// Directory to sync (default: current directory)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Behaviour when sync or deploy fails: continue | stop
    #[arg(long, value_name = "POLICY")]
    pub on_error: Option<OnError>,

    /// Dry run - resolve the user and show what would be done
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the check that the Databricks CLI is installed
    #[arg(long)]
    pub skip_preflight: bool,
}
