//! CLI command for `chroot-pbuilder doctor`
//!
//! Reports on the external commands the wrapper depends on.

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_success, status};
use crate::core::doctor::run_doctor;

/// Execute the doctor command
pub fn execute() -> Result<()> {
    let report = run_doctor();

    // JSON output mode
    if is_json() {
        let json_result = serde_json::json!({
            "status": if report.all_passed() { "success" } else { "error" },
            "checks": report.checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "resolved": c.resolved,
                "suggestion": c.suggestion
            })).collect::<Vec<_>>(),
            "passed_count": report.passed_count(),
            "total_count": report.checks.len()
        });
        println!("{}", serde_json::to_string_pretty(&json_result)?);

        if !report.all_passed() {
            return Err(anyhow::anyhow!("Missing required commands"));
        }
        return Ok(());
    }

    // Quiet mode - only show errors
    if is_quiet() {
        let failed = report.failed();
        if !failed.is_empty() {
            for check in failed {
                eprintln!("{} Missing required: {}", status::ERROR, check.name);
            }
            return Err(anyhow::anyhow!("Missing required commands"));
        }
        return Ok(());
    }

    // Normal output mode
    print_info("Checking required commands...");
    println!();

    for check in &report.checks {
        if check.passed {
            let resolved = check.resolved.as_deref().unwrap_or_default();
            println!("  {} {} ({resolved})", status::SUCCESS, check.name);
        } else {
            println!("  {} {}", status::ERROR, check.name);
            if let Some(suggestion) = &check.suggestion {
                print_detail(&format!("Suggestion: {suggestion}"));
            }
        }
    }

    println!();
    let passed = report.passed_count();
    let total = report.checks.len();

    if report.all_passed() {
        print_success(&format!("All checks passed ({passed}/{total})"));
        Ok(())
    } else {
        println!("{} {passed}/{total} checks passed", status::ERROR);
        Err(anyhow::anyhow!(
            "Missing required commands. Install them before running chroot-pbuilder."
        ))
    }
}
