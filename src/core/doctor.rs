//! System dependency checks
//!
//! Verifies the external commands this wrapper needs before forwarding any
//! work to them, and backs the `doctor` command's report.

use crate::config::defaults::{pbuilder_command, sudo_command};
use crate::error::PreflightError;

/// Result of a single dependency check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the command being checked
    pub name: String,
    /// Whether the command resolved
    pub passed: bool,
    /// Resolved path if found
    pub resolved: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, resolved: String) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            resolved: Some(resolved),
            suggestion: None,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, suggestion: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            resolved: None,
            suggestion: Some(suggestion.to_string()),
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Check if all checks passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get all failed checks
    pub fn failed(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }
}

/// Commands the wrapper requires, with install suggestions
fn required_commands() -> Vec<(String, &'static str)> {
    vec![
        (sudo_command(), "install sudo or set CHROOT_PBUILDER_SUDO"),
        (
            pbuilder_command(),
            "apt install pbuilder, or set CHROOT_PBUILDER_PBUILDER",
        ),
    ]
}

/// Run all dependency checks and collect a report
pub fn run_doctor() -> DoctorReport {
    let mut report = DoctorReport::default();
    for (command, suggestion) in required_commands() {
        match which::which(&command) {
            Ok(path) => report
                .checks
                .push(CheckResult::pass(&command, path.display().to_string())),
            Err(_) => report.checks.push(CheckResult::fail(&command, suggestion)),
        }
    }
    report
}

/// Fail fast if any required command is missing
///
/// Runs before every subcommand except `doctor` itself; the first missing
/// command is reported and nothing else happens.
pub fn preflight() -> Result<(), PreflightError> {
    for (command, _) in required_commands() {
        which::which(&command).map_err(|_| PreflightError::MissingCommand {
            command: command.clone(),
        })?;
    }
    Ok(())
}
