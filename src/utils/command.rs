//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Split a command line such as `code --reuse-window` into program and arguments.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Run `command` with `path` appended as the last argument and wait for it to exit.
pub fn run_with_path(command: &str, path: &Path, context: &str) -> Result<()> {
    let (program, args) = split_command(command).ok_or_else(|| {
        Error::validation_invalid_argument(
            "editor",
            "Editor command is empty",
            Some(command.to_string()),
            None,
        )
    })?;

    let status = Command::new(program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to run {}: {}", context, e),
                Some(context.to_string()),
            )
        })?;

    if !status.success() {
        return Err(Error::internal_io(
            format!("{} exited with {}", context, status),
            Some(context.to_string()),
        ));
    }

    Ok(())
}
