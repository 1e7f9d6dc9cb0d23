//! CLI command implementations
//!
//! The three environment operations share one executor; `doctor` reports on
//! the external commands the wrapper depends on.

pub mod doctor;
pub mod env;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::defaults::DEFAULT_ARCHITECTURE;
use crate::core::doctor::preflight;

/// Flags shared by the environment operations
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Distribution (required)
    #[arg(short, long)]
    pub distribution: String,

    /// Architecture
    #[arg(short, long, default_value = DEFAULT_ARCHITECTURE)]
    pub architecture: String,

    /// Environment tag; derived from a hash of distribution-architecture
    /// when unset. Supplied tags are used verbatim, so two environments
    /// given the same tag share an archive and bind-mount directory.
    #[arg(short, long)]
    pub role: Option<String>,

    /// Additional pbuilder options, forwarded verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new chroot environment
    Create {
        #[command(flatten)]
        args: EnvArgs,

        /// Overwrite the base archive if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Update an existing chroot environment
    Update {
        #[command(flatten)]
        args: EnvArgs,
    },

    /// Log in to a chroot environment
    Login {
        #[command(flatten)]
        args: EnvArgs,
    },

    /// Check that the required external commands are available
    Doctor,
}

impl Commands {
    /// Execute the CLI command
    ///
    /// Every operation runs the preflight check first; `doctor` is the
    /// check, so it skips straight to the report.
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Doctor => doctor::execute(),
            Commands::Create { args, force } => {
                preflight()?;
                env::execute("create", args, force)
            }
            Commands::Update { args } => {
                preflight()?;
                env::execute("update", args, false)
            }
            Commands::Login { args } => {
                preflight()?;
                env::execute("login", args, false)
            }
        }
    }
}
