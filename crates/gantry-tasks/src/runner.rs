//! Task runner — sequential dispatcher over the registry

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::{debug, instrument};

use crate::registry::TaskRegistry;
use crate::reporter::{TaskEvent, TaskReporter};
use crate::task::{TaskAction, TaskId};

/// Errors raised while dispatching tasks
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Unknown task identifier
    #[error("Task '{0}' not found")]
    NotFound(TaskId),

    /// The child process could not be spawned
    #[error("Failed to spawn task '{task}': {source}")]
    Spawn {
        task: TaskId,
        #[source]
        source: std::io::Error,
    },

    /// The child process exited non-zero
    #[error("Task '{task}' exited with code {code}")]
    CommandFailed { task: TaskId, code: i32 },
}

impl TaskError {
    /// The exit code to surface for this error, mirroring the child where
    /// one ran
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } if *code > 0 => *code,
            _ => 1,
        }
    }
}

/// Result of a single task dispatch
#[derive(Debug, Clone)]
pub struct TaskResult {
    /// Task that was executed
    pub id: TaskId,
    /// How the task finished
    pub status: TaskStatus,
    /// How long the task (including its prerequisite chain) took
    pub duration: Duration,
}

/// How a successful dispatch finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// The task (and its prerequisites) ran to completion
    Success,
    /// Nothing was executed (dry run)
    Skipped,
}

/// Options for the task runner
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Working directory for child processes
    pub root_dir: std::path::PathBuf,
    /// Shell used for `-c` invocation
    pub shell: String,
    /// Report what would run without executing anything
    pub dry_run: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            root_dir: std::env::current_dir().unwrap_or_default(),
            shell: "sh".to_string(),
            dry_run: false,
        }
    }
}

/// Task runner — resolves prerequisite chains and executes tasks one at a
/// time, inheriting the parent's standard streams.
pub struct TaskRunner {
    registry: TaskRegistry,
    options: RunnerOptions,
    reporter: Arc<dyn TaskReporter>,
}

impl TaskRunner {
    /// Create a new runner
    pub fn new(registry: TaskRegistry, options: RunnerOptions, reporter: Arc<dyn TaskReporter>) -> Self {
        Self {
            registry,
            options,
            reporter,
        }
    }

    /// The registry this runner dispatches against
    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Dispatch a task: run its prerequisites in declared order, then the
    /// task itself. The first failure aborts the whole chain.
    #[instrument(skip(self, extra_args), fields(task = %id))]
    pub async fn run(&self, id: &TaskId, extra_args: &[String]) -> Result<TaskResult, TaskError> {
        let start = Instant::now();
        let definition = self
            .registry
            .get(id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))?
            .clone();

        for prereq in &definition.prerequisites {
            Box::pin(self.run(prereq, &[])).await?;
        }

        match &definition.action {
            TaskAction::Shell(template) => {
                let command = render_command(template, extra_args);

                if self.options.dry_run {
                    self.reporter.report(&TaskEvent::Skipped {
                        id: id.clone(),
                        reason: "dry run".to_string(),
                    });
                    return Ok(TaskResult {
                        id: id.clone(),
                        status: TaskStatus::Skipped,
                        duration: start.elapsed(),
                    });
                }

                self.reporter.report(&TaskEvent::Started {
                    id: id.clone(),
                    command: command.clone(),
                });

                let result = self.run_shell(id, &command).await;
                let duration = start.elapsed();

                match result {
                    Ok(()) => {
                        self.reporter.report(&TaskEvent::Completed {
                            id: id.clone(),
                            duration,
                        });
                        Ok(TaskResult {
                            id: id.clone(),
                            status: TaskStatus::Success,
                            duration,
                        })
                    }
                    Err(err) => {
                        self.reporter.report(&TaskEvent::Failed {
                            id: id.clone(),
                            duration,
                            error: err.to_string(),
                        });
                        Err(err)
                    }
                }
            }
            TaskAction::Announce(message) => {
                if self.options.dry_run {
                    self.reporter.report(&TaskEvent::Skipped {
                        id: id.clone(),
                        reason: "dry run".to_string(),
                    });
                    return Ok(TaskResult {
                        id: id.clone(),
                        status: TaskStatus::Skipped,
                        duration: start.elapsed(),
                    });
                }

                self.reporter.report(&TaskEvent::Announced {
                    id: id.clone(),
                    message: message.clone(),
                });
                Ok(TaskResult {
                    id: id.clone(),
                    status: TaskStatus::Success,
                    duration: start.elapsed(),
                })
            }
        }
    }

    /// Run a shell command with inherited standard streams, blocking until
    /// it exits.
    async fn run_shell(&self, id: &TaskId, command: &str) -> Result<(), TaskError> {
        debug!(task = %id, command, "spawning child");

        let status = Command::new(&self.options.shell)
            .arg("-c")
            .arg(command)
            .current_dir(&self.options.root_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| TaskError::Spawn {
                task: id.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(TaskError::CommandFailed {
                task: id.clone(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

/// Render the concrete command string for a task: the template with any
/// extra arguments appended space-separated.
pub fn render_command(template: &str, extra_args: &[String]) -> String {
    if extra_args.is_empty() {
        template.to_string()
    } else {
        format!("{} {}", template, extra_args.join(" "))
    }
}
