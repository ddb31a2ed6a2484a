//! Task types and definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a task within the registry
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskId {
    /// Namespace the task belongs to (e.g. "db"), if any
    pub namespace: Option<String>,
    /// Task name (e.g. "build", "test", "reset")
    pub name: String,
}

impl TaskId {
    /// Create a top-level task ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    /// Create a namespaced task ID
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// Parse a task ID from "name" or "namespace:name" format
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.splitn(2, ':').collect();
        match parts.as_slice() {
            [name] if !name.is_empty() => Some(Self::new(*name)),
            [ns, name] if !ns.is_empty() && !name.is_empty() => Some(Self::namespaced(*ns, *name)),
            _ => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// What a task does when dispatched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaskAction {
    /// Shell command to execute; extra arguments are appended verbatim
    Shell(String),
    /// Print a fixed message without spawning a process
    Announce(String),
}

/// Definition of a task in the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Task identifier
    pub id: TaskId,

    /// One-line help text shown in listings
    pub help: String,

    /// What to do when this task runs
    pub action: TaskAction,

    /// Tasks that must complete successfully first, in declared order
    #[serde(default)]
    pub prerequisites: Vec<TaskId>,
}

impl TaskDefinition {
    /// Create a task that shells out to a command
    pub fn shell(id: TaskId, help: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id,
            help: help.into(),
            action: TaskAction::Shell(command.into()),
            prerequisites: Vec::new(),
        }
    }

    /// Create a task that only prints a message once its prerequisites ran
    pub fn announce(id: TaskId, help: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            help: help.into(),
            action: TaskAction::Announce(message.into()),
            prerequisites: Vec::new(),
        }
    }

    /// Add a prerequisite
    pub fn with_prerequisite(mut self, prereq: TaskId) -> Self {
        self.prerequisites.push(prereq);
        self
    }

    /// The command template, if this task shells out
    pub fn command(&self) -> Option<&str> {
        match &self.action {
            TaskAction::Shell(cmd) => Some(cmd),
            TaskAction::Announce(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::new("build").to_string(), "build");
        assert_eq!(TaskId::namespaced("db", "reset").to_string(), "db:reset");
    }

    #[test]
    fn test_task_id_parse_plain() {
        let id = TaskId::parse("build").unwrap();
        assert!(id.namespace.is_none());
        assert_eq!(id.name, "build");
    }

    #[test]
    fn test_task_id_parse_namespaced() {
        let id = TaskId::parse("db:migrate").unwrap();
        assert_eq!(id.namespace.as_deref(), Some("db"));
        assert_eq!(id.name, "migrate");
    }

    #[test]
    fn test_task_id_parse_invalid() {
        assert!(TaskId::parse("").is_none());
        assert!(TaskId::parse(":reset").is_none());
        assert!(TaskId::parse("db:").is_none());
    }

    #[test]
    fn test_definition_builder() {
        let def = TaskDefinition::shell(TaskId::new("test"), "Run tests", "scripts/ci/test")
            .with_prerequisite(TaskId::new("build"));

        assert_eq!(def.id.to_string(), "test");
        assert_eq!(def.command(), Some("scripts/ci/test"));
        assert_eq!(def.prerequisites.len(), 1);
    }

    #[test]
    fn test_announce_has_no_command() {
        let def = TaskDefinition::announce(
            TaskId::namespaced("db", "reset"),
            "Reset database",
            "Database reset complete",
        );
        assert!(def.command().is_none());
    }
}
