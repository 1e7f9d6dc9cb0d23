//! chroot-pbuilder CLI - pbuilder chroot environment wrapper
//!
//! Entry point for the chroot-pbuilder command-line application.

use anyhow::Result;
use clap::Parser;

use chroot_pbuilder::cli::output::{display_error, OutputConfig};
use chroot_pbuilder::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v raises the level to info, -vv to debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    // Apply output configuration globally
    let output_config = OutputConfig::new(cli.quiet, cli.json);
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
