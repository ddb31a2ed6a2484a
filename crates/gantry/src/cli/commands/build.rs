//! Build commands — shell out to the CI build script

use clap::Args;
use tracing::info;

use gantry_tasks::TaskId;

use crate::cli::Cli;

use super::dispatch;

/// Build project
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Additional arguments passed through to the build script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(args = ?self.args, "executing build command");
        dispatch(cli, TaskId::new("build"), self.args.clone(), false)
    }
}

/// Build Docker images
#[derive(Debug, Args)]
pub struct DockerCommand {}

impl DockerCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        dispatch(cli, TaskId::new("docker"), Vec::new(), false)
    }
}
