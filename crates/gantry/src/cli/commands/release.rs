//! Release command — shell out to the release script

use clap::{Args, ValueEnum};
use tracing::info;

use gantry_tasks::TaskId;

use crate::cli::Cli;

use super::dispatch;

/// Create release
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Release type, rendered as a flag on the release script
    #[arg(long = "type", value_enum)]
    pub release_type: Option<ReleaseType>,
}

/// Supported release types
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReleaseType {
    /// Release candidate
    Rc,
    /// Hotfix release
    Hotfix,
}

impl ReleaseType {
    fn flag(&self) -> &'static str {
        match self {
            Self::Rc => "--rc",
            Self::Hotfix => "--hotfix",
        }
    }
}

impl ReleaseCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(release_type = ?self.release_type, "executing release command");
        dispatch(cli, TaskId::new("release"), self.extra_args(), false)
    }

    fn extra_args(&self) -> Vec<String> {
        self.release_type
            .iter()
            .map(|t| t.flag().to_string())
            .collect()
    }
}
