//! Path resolution
//!
//! Derives the base archive path and bind-mount directory for a
//! (distribution, architecture, role) triple. Resolution is a pure function
//! of its inputs; only [`resolve_paths`] touches process state (cwd, home).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha512};

use crate::config::defaults::{BIND_MOUNT_ROOT, ROLE_HASH_LEN};
use crate::core::context::EnvContext;
use crate::error::PathError;

/// Paths resolved for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Effective role, either caller-supplied or hash-derived
    pub role: String,
    /// Whether the role was derived rather than supplied
    pub role_derived: bool,
    /// Base archive path under the invocation cwd
    pub archive: PathBuf,
    /// Bind-mount directory under the user's home
    pub bind_mount_dir: PathBuf,
}

/// Derive a role tag from a distribution/architecture pair
///
/// Returns the first [`ROLE_HASH_LEN`] hex characters of
/// SHA-512("{distribution}-{architecture}"). Deterministic, and distinct
/// pairs produce distinct tags with overwhelming probability.
pub fn derive_role(distribution: &str, architecture: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(format!("{distribution}-{architecture}"));
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(ROLE_HASH_LEN);
    digest
}

/// Resolve paths for a context given explicit cwd and home directories
///
/// Pure function; the caller supplies the directories. Explicitly supplied
/// roles are used verbatim with no uniqueness check, so two environments
/// given the same role share an archive and bind-mount directory.
pub fn resolve(ctx: &EnvContext, cwd: &Path, home: &Path) -> ResolvedPaths {
    let (role, role_derived) = match &ctx.role {
        Some(role) => (role.clone(), false),
        None => (derive_role(&ctx.distribution, &ctx.architecture), true),
    };

    let name = format!("{}-{}-{}", ctx.distribution, ctx.architecture, role);

    ResolvedPaths {
        archive: cwd.join(format!("{name}.tgz")),
        bind_mount_dir: home.join(BIND_MOUNT_ROOT).join(name),
        role,
        role_derived,
    }
}

/// Resolve paths for a context using the process cwd and the user's home
pub fn resolve_paths(ctx: &EnvContext) -> Result<ResolvedPaths, PathError> {
    let cwd = std::env::current_dir().map_err(|e| PathError::CurrentDir {
        error: e.to_string(),
    })?;
    let home = dirs::home_dir().ok_or(PathError::HomeDirNotFound)?;
    Ok(resolve(ctx, &cwd, &home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::generators::{architecture_name, distribution_name};
    use proptest::prelude::*;
    use std::path::Path;

    fn ctx(distribution: &str, architecture: &str, role: Option<&str>) -> EnvContext {
        EnvContext::new(
            distribution.to_string(),
            architecture.to_string(),
            role.map(String::from),
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_derive_role_known_value() {
        // First 10 hex chars of SHA-512("bookworm-amd64"), pinned so the
        // naming scheme cannot drift silently
        assert_eq!(derive_role("bookworm", "amd64"), "b88024590b");
    }

    #[test]
    fn test_resolve_with_explicit_role() {
        let paths = resolve(
            &ctx("bookworm", "amd64", Some("ci")),
            Path::new("/work"),
            Path::new("/home/user"),
        );
        assert_eq!(paths.role, "ci");
        assert!(!paths.role_derived);
        assert_eq!(paths.archive, Path::new("/work/bookworm-amd64-ci.tgz"));
        assert_eq!(
            paths.bind_mount_dir,
            Path::new("/home/user/.chroot-pbuilder/bookworm-amd64-ci")
        );
    }

    #[test]
    fn test_resolve_with_derived_role() {
        let paths = resolve(
            &ctx("bookworm", "amd64", None),
            Path::new("/work"),
            Path::new("/home/user"),
        );
        assert!(paths.role_derived);
        assert_eq!(paths.role, derive_role("bookworm", "amd64"));
        let expected = format!("/work/bookworm-amd64-{}.tgz", paths.role);
        assert_eq!(paths.archive, Path::new(&expected));
    }

    proptest! {
        #[test]
        fn test_derive_role_deterministic(
            dist in distribution_name(),
            arch in architecture_name(),
        ) {
            let first = derive_role(&dist, &arch);
            let second = derive_role(&dist, &arch);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), ROLE_HASH_LEN);
        }

        #[test]
        fn test_derive_role_distinct_pairs_differ(
            a in (distribution_name(), architecture_name()),
            b in (distribution_name(), architecture_name()),
        ) {
            // Hash-based uniqueness: distinct inputs should not collide in
            // a small sample (names exclude '-', so pairs cannot alias)
            prop_assume!(a != b);
            prop_assert_ne!(derive_role(&a.0, &a.1), derive_role(&b.0, &b.1));
        }

        #[test]
        fn test_resolve_path_shapes(
            dist in distribution_name(),
            arch in architecture_name(),
        ) {
            let paths = resolve(&ctx(&dist, &arch, None), Path::new("/cwd"), Path::new("/home/u"));
            let name = format!("{dist}-{arch}-{}", paths.role);
            prop_assert_eq!(paths.archive, Path::new("/cwd").join(format!("{name}.tgz")));
            prop_assert_eq!(
                paths.bind_mount_dir,
                Path::new("/home/u").join(".chroot-pbuilder").join(name)
            );
        }
    }
}
