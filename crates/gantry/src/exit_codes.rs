//! Exit codes for the CLI

#![allow(dead_code)]

use gantry_core::error::ConfigError;
use gantry_tasks::TaskError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Unknown task identifier
pub const TASK_NOT_FOUND: i32 = 3;

/// Map an error to the process exit code.
///
/// A failed child propagates its own exit status; everything else falls
/// into one of the fixed buckets above.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(task_err) = err.downcast_ref::<TaskError>() {
        return match task_err {
            TaskError::NotFound(_) => TASK_NOT_FOUND,
            _ => task_err.exit_code(),
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }

    ERROR
}
