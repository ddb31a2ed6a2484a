//! Run command — dispatch any registered task by identifier

use anyhow::Context;
use clap::Args;
use tracing::info;

use gantry_tasks::TaskId;

use crate::cli::Cli;

use super::dispatch;

/// Run a task by identifier (e.g. "build", "db:reset")
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Task identifier
    pub task: String,

    /// Additional arguments passed through to the underlying script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Show what would run without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let id = TaskId::parse(&self.task)
            .with_context(|| format!("Invalid task identifier '{}'", self.task))?;
        info!(task = %id, dry_run = self.dry_run, "executing run command");
        dispatch(cli, id, self.args.clone(), self.dry_run)
    }
}
