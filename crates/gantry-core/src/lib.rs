//! Gantry Core - Core library for the Gantry task runner
//!
//! This crate provides the error taxonomy and the configuration system
//! shared by the task engine and the CLI.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, Config};
pub use error::{GantryError, Result};
