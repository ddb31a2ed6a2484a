//! CI commands — pipeline and configuration testing

use clap::Args;
use tracing::info;

use gantry_tasks::TaskId;

use crate::cli::Cli;

use super::dispatch;

/// Run CI pipeline
#[derive(Debug, Args)]
pub struct CiCommand {}

impl CiCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        dispatch(cli, TaskId::new("ci"), Vec::new(), false)
    }
}

/// Test CI configurations
#[derive(Debug, Args)]
pub struct CiTestCommand {
    /// Platform to test against (appended to the CI-tester invocation)
    #[arg(short, long)]
    pub platform: Option<String>,
}

impl CiTestCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(platform = ?self.platform, "executing ci-test command");
        dispatch(cli, TaskId::new("ci-test"), self.extra_args(), false)
    }

    fn extra_args(&self) -> Vec<String> {
        self.platform.iter().cloned().collect()
    }
}
