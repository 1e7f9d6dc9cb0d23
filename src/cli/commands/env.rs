//! CLI command for the environment operations (create/update/login)

use anyhow::Result;
use tracing::info;

use crate::cli::commands::EnvArgs;
use crate::cli::output::{print_detail, print_info, print_success};
use crate::core::context::EnvContext;
use crate::core::env::{run_operation, EnvOutcome};
use crate::core::ops;
use crate::core::paths::resolve_paths;
use crate::infra::pbuilder::SudoPbuilder;

/// Execute one environment operation end to end
pub fn execute(operation: &str, args: EnvArgs, force: bool) -> Result<()> {
    let op = ops::find(operation)
        .ok_or_else(|| anyhow::anyhow!("unknown operation: {operation}"))?;

    let ctx = EnvContext::new(args.distribution, args.architecture, args.role, force)?;
    let paths = resolve_paths(&ctx)?;

    if paths.role_derived {
        info!(
            "derived role {} for {}-{}",
            paths.role, ctx.distribution, ctx.architecture
        );
    }

    match run_operation(op, &ctx, &paths, &args.passthrough, &SudoPbuilder)? {
        EnvOutcome::Skipped { archive } => {
            print_info(&format!("Archive already exists at {}", archive.display()));
            print_detail("Use --force to overwrite it.");
        }
        EnvOutcome::Completed => {
            print_success(&format!("pbuilder {} finished", op.name));
        }
    }

    Ok(())
}
