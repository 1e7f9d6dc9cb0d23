//! pbuilder process execution
//!
//! Runs pbuilder elevated through the privilege-escalation wrapper with the
//! invoking process's standard streams inherited, since create/update may
//! prompt and login is fully interactive.

use std::process::Command;

use tracing::debug;

use crate::config::defaults::{pbuilder_command, sudo_command};
use crate::core::env::ToolRunner;
use crate::error::EnvError;

/// Production runner: `sudo pbuilder <operation> <args...>`
#[derive(Debug, Default)]
pub struct SudoPbuilder;

impl ToolRunner for SudoPbuilder {
    fn run(&self, operation: &str, args: &[String]) -> Result<(), EnvError> {
        let sudo = sudo_command();
        let pbuilder = pbuilder_command();
        debug!("running {sudo} {pbuilder} {operation}");

        // Streams are inherited by default with status()
        let status = Command::new(&sudo)
            .arg(&pbuilder)
            .arg(operation)
            .args(args)
            .status()
            .map_err(|e| EnvError::ToolSpawn {
                operation: operation.to_string(),
                error: e.to_string(),
            })?;

        if !status.success() {
            return Err(EnvError::ToolExit {
                operation: operation.to_string(),
                status,
            });
        }
        Ok(())
    }
}
