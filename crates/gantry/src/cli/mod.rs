//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{
    BuildCommand, CiCommand, CiTestCommand, CompletionsCommand, DbCommand, DockerCommand,
    ListCommand, ReleaseCommand, RunCommand, TestCommand, TestCoverageCommand, TestWatchCommand,
};

/// Gantry - developer task runner CLI
#[derive(Debug, Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run tests
    Test(TestCommand),

    /// Run tests in watch mode
    TestWatch(TestWatchCommand),

    /// Run tests with coverage
    TestCoverage(TestCoverageCommand),

    /// Build project
    Build(BuildCommand),

    /// Build Docker images
    Docker(DockerCommand),

    /// Run CI pipeline
    Ci(CiCommand),

    /// Test CI configurations
    CiTest(CiTestCommand),

    /// Database operations
    Db(DbCommand),

    /// Create release
    Release(ReleaseCommand),

    /// Run a task by identifier
    Run(RunCommand),

    /// List registered tasks
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Test(ref cmd) => cmd.execute(&self),
            Commands::TestWatch(ref cmd) => cmd.execute(&self),
            Commands::TestCoverage(ref cmd) => cmd.execute(&self),
            Commands::Build(ref cmd) => cmd.execute(&self),
            Commands::Docker(ref cmd) => cmd.execute(&self),
            Commands::Ci(ref cmd) => cmd.execute(&self),
            Commands::CiTest(ref cmd) => cmd.execute(&self),
            Commands::Db(ref cmd) => cmd.execute(&self),
            Commands::Release(ref cmd) => cmd.execute(&self),
            Commands::Run(ref cmd) => cmd.execute(&self),
            Commands::List(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }
}
