//! Task execution reporting

use std::time::Duration;

use crate::task::TaskId;

/// Events emitted during task execution
#[derive(Debug, Clone)]
pub enum TaskEvent {
    /// A task is starting execution
    Started { id: TaskId, command: String },
    /// A task printed its fixed message instead of spawning a process
    Announced { id: TaskId, message: String },
    /// A task completed successfully
    Completed { id: TaskId, duration: Duration },
    /// A task failed
    Failed {
        id: TaskId,
        duration: Duration,
        error: String,
    },
    /// A task was skipped (dry run)
    Skipped { id: TaskId, reason: String },
}

/// Trait for reporting task execution progress
pub trait TaskReporter: Send + Sync {
    /// Handle a task event
    fn report(&self, event: &TaskEvent);
}

/// Simple reporter that logs to tracing
#[derive(Debug, Default)]
pub struct TracingReporter;

impl TaskReporter for TracingReporter {
    fn report(&self, event: &TaskEvent) {
        match event {
            TaskEvent::Started { id, command } => {
                tracing::info!("Starting {}: {}", id, command);
            }
            TaskEvent::Announced { id, message } => {
                tracing::info!("{}: {}", id, message);
            }
            TaskEvent::Completed { id, duration } => {
                tracing::info!("{} completed in {:.1}s", id, duration.as_secs_f64());
            }
            TaskEvent::Failed {
                id,
                duration,
                error,
            } => {
                tracing::error!("{} failed after {:.1}s: {}", id, duration.as_secs_f64(), error);
            }
            TaskEvent::Skipped { id, reason } => {
                tracing::info!("{} skipped: {}", id, reason);
            }
        }
    }
}

/// Reporter that collects events for later inspection (useful for testing)
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: std::sync::Mutex<Vec<TaskEvent>>,
}

impl CollectingReporter {
    /// Get all collected events
    pub fn events(&self) -> Vec<TaskEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TaskReporter for CollectingReporter {
    fn report(&self, event: &TaskEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
