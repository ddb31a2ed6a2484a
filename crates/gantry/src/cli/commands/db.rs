//! Database lifecycle commands

use clap::{Args, Subcommand};
use tracing::info;

use gantry_tasks::TaskId;

use crate::cli::Cli;

use super::dispatch;

/// Database operations
#[derive(Debug, Args)]
pub struct DbCommand {
    #[command(subcommand)]
    pub action: DbAction,
}

/// Database subcommands
#[derive(Debug, Subcommand)]
pub enum DbAction {
    /// Start database
    Start,
    /// Run database migrations
    Migrate,
    /// Seed database
    Seed,
    /// Reset database (start, migrate, seed)
    Reset,
}

impl DbAction {
    fn task_id(&self) -> TaskId {
        let name = match self {
            Self::Start => "start",
            Self::Migrate => "migrate",
            Self::Seed => "seed",
            Self::Reset => "reset",
        };
        TaskId::namespaced("db", name)
    }
}

impl DbCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let id = self.action.task_id();
        info!(task = %id, "executing db command");
        dispatch(cli, id, Vec::new(), false)
    }
}
