//! Default commands and naming constants
//!
//! Environment variables can override the external commands:
//! - `CHROOT_PBUILDER_SUDO` - Override the privilege-escalation wrapper
//! - `CHROOT_PBUILDER_PBUILDER` - Override the pbuilder executable

use std::env;

/// Environment variable names for command overrides
pub const ENV_SUDO: &str = "CHROOT_PBUILDER_SUDO";
pub const ENV_PBUILDER: &str = "CHROOT_PBUILDER_PBUILDER";

/// Default privilege-escalation wrapper
pub const DEFAULT_SUDO: &str = "sudo";

/// Default pbuilder executable path
pub const DEFAULT_PBUILDER: &str = "/usr/sbin/pbuilder";

/// Default architecture when none is given
pub const DEFAULT_ARCHITECTURE: &str = "amd64";

/// Directory under the user's home holding bind-mount directories
pub const BIND_MOUNT_ROOT: &str = ".chroot-pbuilder";

/// Number of hex characters kept from the role hash
pub const ROLE_HASH_LEN: usize = 10;

/// Resolve the privilege-escalation command, honoring the env override
pub fn sudo_command() -> String {
    env::var(ENV_SUDO).unwrap_or_else(|_| DEFAULT_SUDO.to_string())
}

/// Resolve the pbuilder command, honoring the env override
pub fn pbuilder_command() -> String {
    env::var(ENV_PBUILDER).unwrap_or_else(|_| DEFAULT_PBUILDER.to_string())
}
