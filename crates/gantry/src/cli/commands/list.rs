//! List command — show the registered tasks

use clap::Args;
use console::style;

use gantry_core::config::load_config_or_default;
use gantry_tasks::TaskRegistry;

use crate::cli::{Cli, OutputFormat};

/// List registered tasks
#[derive(Debug, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);
        let registry = TaskRegistry::builtin(&config)?;

        if cli.format == OutputFormat::Json {
            let tasks: Vec<serde_json::Value> = registry
                .iter()
                .map(|def| {
                    serde_json::json!({
                        "id": def.id.to_string(),
                        "help": def.help,
                        "command": def.command(),
                        "prerequisites": def
                            .prerequisites
                            .iter()
                            .map(|p| p.to_string())
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
            return Ok(());
        }

        let width = registry
            .names()
            .iter()
            .map(|id| id.to_string().len())
            .max()
            .unwrap_or(0);

        for def in registry.iter() {
            let id = def.id.to_string();
            print!("  {}{}  {}", style(&id).bold(), " ".repeat(width - id.len()), def.help);

            if cli.verbose {
                if let Some(cmd) = def.command() {
                    print!(" {}", style(format!("({})", cmd)).dim());
                }
                if !def.prerequisites.is_empty() {
                    let deps: Vec<String> =
                        def.prerequisites.iter().map(|p| p.to_string()).collect();
                    print!(" {}", style(format!("[after: {}]", deps.join(", "))).dim());
                }
            }
            println!();
        }

        Ok(())
    }
}
