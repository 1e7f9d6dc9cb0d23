//! chroot-pbuilder - pbuilder chroot environment wrapper
//!
//! This library provides the logic behind the `chroot-pbuilder` binary, a
//! thin convenience layer over pbuilder for creating, updating, and logging
//! in to chroot build environments.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (path derivation, operation flows, checks)
//! - [`infra`] - Infrastructure layer (process execution)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
