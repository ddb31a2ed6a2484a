//! CLI commands

mod build;
mod ci;
mod completions;
mod db;
mod list;
mod release;
mod run;

pub use build::{BuildCommand, DockerCommand};
pub use ci::{CiCommand, CiTestCommand};
pub use completions::CompletionsCommand;
pub use db::DbCommand;
pub use list::ListCommand;
pub use release::ReleaseCommand;
pub use run::RunCommand;
pub use test::{TestCommand, TestCoverageCommand, TestWatchCommand};

use std::sync::Arc;

use console::style;

use gantry_core::config::load_config_or_default;
use gantry_tasks::{
    RunnerOptions, TaskEvent, TaskId, TaskRegistry, TaskReporter, TaskRunner, TaskStatus,
    TracingReporter,
};

use crate::cli::{Cli, OutputFormat};

/// Shared dispatch path: load config, build the registry and runner, run
/// the task, and report the outcome.
pub(crate) fn dispatch(
    cli: &Cli,
    id: TaskId,
    extra_args: Vec<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch_async(cli, id, extra_args, dry_run))
}

async fn dispatch_async(
    cli: &Cli,
    id: TaskId,
    extra_args: Vec<String>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, _) = load_config_or_default(&cwd);

    let registry = TaskRegistry::builtin(&config)?;

    let reporter: Arc<dyn TaskReporter> = if cli.quiet {
        Arc::new(TracingReporter)
    } else {
        Arc::new(ConsoleReporter::new(cli.verbose))
    };

    let options = RunnerOptions {
        root_dir: cwd,
        shell: config.runner.shell.clone(),
        dry_run,
    };

    let runner = TaskRunner::new(registry, options, reporter);
    let result = runner.run(&id, &extra_args).await?;

    if cli.format == OutputFormat::Json {
        let summary = serde_json::json!({
            "task": result.id.to_string(),
            "status": match result.status {
                TaskStatus::Success => "success",
                TaskStatus::Skipped => "skipped",
            },
            "duration_ms": result.duration.as_millis(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

/// Console reporter with live output
struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl TaskReporter for ConsoleReporter {
    fn report(&self, event: &TaskEvent) {
        match event {
            TaskEvent::Started { id, command } => {
                println!(
                    "  {} {} {}",
                    style("▸").dim(),
                    style(id).bold(),
                    if self.verbose {
                        style(format!("({})", command)).dim().to_string()
                    } else {
                        String::new()
                    }
                );
            }
            TaskEvent::Announced { message, .. } => {
                println!("{}", message);
            }
            TaskEvent::Completed { id, duration } => {
                println!(
                    "  {} {} {}",
                    style("✓").green(),
                    style(id).green(),
                    style(format!("{:.1}s", duration.as_secs_f64())).dim()
                );
            }
            TaskEvent::Failed {
                id,
                duration,
                error,
            } => {
                println!(
                    "  {} {} {} {}",
                    style("✗").red(),
                    style(id).red(),
                    style(format!("{:.1}s", duration.as_secs_f64())).dim(),
                    style(error).red().dim()
                );
            }
            TaskEvent::Skipped { id, reason } => {
                println!(
                    "  {} {} {}",
                    style("○").yellow(),
                    style(id).yellow(),
                    style(format!("({})", reason)).dim()
                );
            }
        }
    }
}
