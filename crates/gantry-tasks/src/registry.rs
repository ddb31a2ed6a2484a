//! Task registry — the immutable name → invocation table

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use gantry_core::config::Config;

use crate::task::{TaskDefinition, TaskId};

/// Errors raised while building a registry
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A task identifier was registered twice
    #[error("Task '{0}' is already registered")]
    DuplicateTask(TaskId),

    /// A prerequisite names a task that is not registered yet
    #[error("Task '{task}' requires unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite { task: TaskId, prerequisite: TaskId },
}

/// Registry of task definitions.
///
/// Built once at startup and never mutated afterwards. Prerequisites must
/// reference tasks registered earlier, so the dependency graph is acyclic
/// by construction.
pub struct TaskRegistry {
    tasks: HashMap<TaskId, TaskDefinition>,
    order: Vec<TaskId>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            tasks: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a registry with all built-in tasks, with command strings
    /// rooted at the configured script directory.
    pub fn builtin(config: &Config) -> Result<Self, RegistryError> {
        let scripts = &config.scripts.dir;
        let mut registry = Self::empty();

        registry.register(TaskDefinition::shell(
            TaskId::new("test"),
            "Run tests",
            script(scripts, "test"),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("test-watch"),
            "Run tests in watch mode",
            format!("{} --watch", script(scripts, "test")),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("test-coverage"),
            "Run tests with coverage",
            format!("{} coverage", script(scripts, "test")),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("build"),
            "Build project",
            script(scripts, "build"),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("docker"),
            "Build Docker images",
            format!("{} docker", script(scripts, "build")),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("ci"),
            "Run CI pipeline",
            script(scripts, "ci"),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::new("ci-test"),
            "Test CI configurations",
            script(scripts, "utils/ci-tester.sh"),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::namespaced("db", "start"),
            "Start database",
            format!("{} start", script(scripts, "utils/db.sh")),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::namespaced("db", "migrate"),
            "Run database migrations",
            format!("{} migrate", script(scripts, "utils/db.sh")),
        ))?;
        registry.register(TaskDefinition::shell(
            TaskId::namespaced("db", "seed"),
            "Seed database",
            format!("{} seed", script(scripts, "utils/db.sh")),
        ))?;
        registry.register(
            TaskDefinition::announce(
                TaskId::namespaced("db", "reset"),
                "Reset database",
                "Database reset complete",
            )
            .with_prerequisite(TaskId::namespaced("db", "start"))
            .with_prerequisite(TaskId::namespaced("db", "migrate"))
            .with_prerequisite(TaskId::namespaced("db", "seed")),
        )?;
        registry.register(TaskDefinition::shell(
            TaskId::new("release"),
            "Create release",
            script(scripts, "tasks/release.sh"),
        ))?;

        Ok(registry)
    }

    /// Register a task definition.
    ///
    /// Fails if the identifier is taken or a prerequisite has not been
    /// registered before this task.
    pub fn register(&mut self, definition: TaskDefinition) -> Result<(), RegistryError> {
        let id = definition.id.clone();
        if self.tasks.contains_key(&id) {
            return Err(RegistryError::DuplicateTask(id));
        }

        for prereq in &definition.prerequisites {
            if !self.tasks.contains_key(prereq) {
                return Err(RegistryError::UnknownPrerequisite {
                    task: id,
                    prerequisite: prereq.clone(),
                });
            }
        }

        self.order.push(id.clone());
        self.tasks.insert(id, definition);
        Ok(())
    }

    /// Get a task definition by identifier
    pub fn get(&self, id: &TaskId) -> Option<&TaskDefinition> {
        let result = self.tasks.get(id);
        debug!(task = %id, found = result.is_some(), "task registry lookup");
        result
    }

    /// All task identifiers in declaration order
    pub fn names(&self) -> &[TaskId] {
        &self.order
    }

    /// Iterate over definitions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn script(dir: &Path, name: &str) -> String {
    format!("{}/{}", dir.display(), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskAction;

    fn builtin() -> TaskRegistry {
        TaskRegistry::builtin(&Config::default()).unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = TaskRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get(&TaskId::new("test")).is_none());
    }

    #[test]
    fn test_builtin_registry_has_all_tasks() {
        let registry = builtin();
        assert_eq!(registry.len(), 12);

        for name in [
            "test",
            "test-watch",
            "test-coverage",
            "build",
            "docker",
            "ci",
            "ci-test",
            "db:start",
            "db:migrate",
            "db:seed",
            "db:reset",
            "release",
        ] {
            let id = TaskId::parse(name).unwrap();
            let def = registry.get(&id).unwrap();
            assert_eq!(def.id, id);
        }
    }

    #[test]
    fn test_builtin_command_strings() {
        let registry = builtin();

        let test = registry.get(&TaskId::new("test")).unwrap();
        assert_eq!(test.command(), Some("scripts/ci/test"));

        let docker = registry.get(&TaskId::new("docker")).unwrap();
        assert_eq!(docker.command(), Some("scripts/ci/build docker"));

        let migrate = registry.get(&TaskId::namespaced("db", "migrate")).unwrap();
        assert_eq!(migrate.command(), Some("scripts/ci/utils/db.sh migrate"));

        let release = registry.get(&TaskId::new("release")).unwrap();
        assert_eq!(release.command(), Some("scripts/ci/tasks/release.sh"));
    }

    #[test]
    fn test_builtin_respects_configured_scripts_dir() {
        let mut config = Config::default();
        config.scripts.dir = "ops/ci".into();
        let registry = TaskRegistry::builtin(&config).unwrap();

        let ci = registry.get(&TaskId::new("ci")).unwrap();
        assert_eq!(ci.command(), Some("ops/ci/ci"));
    }

    #[test]
    fn test_db_reset_chain_order() {
        let registry = builtin();
        let reset = registry.get(&TaskId::namespaced("db", "reset")).unwrap();

        let prereqs: Vec<String> = reset.prerequisites.iter().map(|p| p.to_string()).collect();
        assert_eq!(prereqs, vec!["db:start", "db:migrate", "db:seed"]);
        assert!(matches!(reset.action, TaskAction::Announce(_)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = TaskRegistry::empty();
        registry
            .register(TaskDefinition::shell(TaskId::new("ci"), "Run CI", "ci"))
            .unwrap();

        let result = registry.register(TaskDefinition::shell(TaskId::new("ci"), "Again", "ci"));
        assert!(matches!(result, Err(RegistryError::DuplicateTask(_))));
    }

    #[test]
    fn test_forward_prerequisite_rejected() {
        let mut registry = TaskRegistry::empty();
        let result = registry.register(
            TaskDefinition::announce(TaskId::new("all"), "Everything", "done")
                .with_prerequisite(TaskId::new("later")),
        );
        assert!(matches!(
            result,
            Err(RegistryError::UnknownPrerequisite { .. })
        ));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let registry = builtin();
        let first: Vec<String> = registry
            .names()
            .iter()
            .take(3)
            .map(|id| id.to_string())
            .collect();
        assert_eq!(first, vec!["test", "test-watch", "test-coverage"]);
    }
}
