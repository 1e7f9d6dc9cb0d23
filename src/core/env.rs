//! Environment operation flow
//!
//! Runs one pbuilder operation against the resolved paths: the archive
//! pre-check for `create`, bind-mount directory creation, argument
//! assembly, and the hand-off to a [`ToolRunner`]. The production runner
//! lives in [`crate::infra::pbuilder`]; tests substitute a recording fake.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::context::EnvContext;
use crate::core::ops::Operation;
use crate::core::paths::ResolvedPaths;
use crate::error::EnvError;

/// Executes a pbuilder operation with pre-built arguments
pub trait ToolRunner {
    /// Run `operation` with `args` appended after the operation name
    fn run(&self, operation: &str, args: &[String]) -> Result<(), EnvError>;
}

/// Result of one environment operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOutcome {
    /// The archive already exists and --force was not given; nothing ran
    Skipped { archive: PathBuf },
    /// The external tool ran and exited successfully
    Completed,
}

/// Build the pbuilder argument list for an operation
///
/// Everything after the operation name: the fixed flags in their
/// documented order, then the passthrough arguments verbatim.
pub fn build_args(
    ctx: &EnvContext,
    paths: &ResolvedPaths,
    passthrough: &[String],
) -> Vec<String> {
    let mut args = vec![
        "--basetgz".to_string(),
        paths.archive.display().to_string(),
        "--distribution".to_string(),
        ctx.distribution.clone(),
        "--architecture".to_string(),
        ctx.architecture.clone(),
        "--bindmounts".to_string(),
        paths.bind_mount_dir.display().to_string(),
    ];
    args.extend_from_slice(passthrough);
    args
}

/// Run one operation end to end
///
/// For operations with an archive pre-check, an existing archive either
/// short-circuits the run ([`EnvOutcome::Skipped`]) or, with --force, is
/// removed first. The bind-mount directory is created before invocation.
pub fn run_operation<R: ToolRunner>(
    op: &Operation,
    ctx: &EnvContext,
    paths: &ResolvedPaths,
    passthrough: &[String],
    runner: &R,
) -> Result<EnvOutcome, EnvError> {
    if op.requires_archive_check && paths.archive.exists() {
        if !ctx.force {
            return Ok(EnvOutcome::Skipped {
                archive: paths.archive.clone(),
            });
        }
        info!("removing existing archive at {}", paths.archive.display());
        fs::remove_file(&paths.archive).map_err(|e| EnvError::ArchiveRemove {
            path: paths.archive.clone(),
            error: e.to_string(),
        })?;
    }

    ensure_bind_mount_dir(paths)?;

    let args = build_args(ctx, paths, passthrough);
    debug!("invoking pbuilder {} {}", op.name, args.join(" "));
    runner.run(op.name, &args)?;
    Ok(EnvOutcome::Completed)
}

/// Create the bind-mount directory (recursively) with mode 0755
///
/// An existing directory is left exactly as found, including its
/// permissions; the mode is applied only when the directory is created.
fn ensure_bind_mount_dir(paths: &ResolvedPaths) -> Result<(), EnvError> {
    let dir = &paths.bind_mount_dir;
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| EnvError::BindMountCreate {
        path: dir.clone(),
        error: e.to_string(),
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).map_err(|e| {
            EnvError::BindMountCreate {
                path: dir.clone(),
                error: e.to_string(),
            }
        })?;
    }

    Ok(())
}
