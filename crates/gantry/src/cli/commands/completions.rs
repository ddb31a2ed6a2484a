//! Shell completions generation command

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::Cli;

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, "gantry", &mut io::stdout());
        Ok(())
    }
}
