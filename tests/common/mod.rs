//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test environment context
///
/// Creates temporary working and home directories so a test invocation
/// cannot touch real user state.
pub struct TestEnv {
    /// Temporary working directory (archive location)
    pub cwd: TempDir,
    /// Temporary home directory (bind-mount location)
    pub home: TempDir,
}

impl TestEnv {
    /// Create a new test environment
    pub fn new() -> Self {
        Self {
            cwd: TempDir::new().expect("Failed to create temp cwd"),
            home: TempDir::new().expect("Failed to create temp home"),
        }
    }

    /// Path of the working directory
    pub fn cwd(&self) -> &Path {
        self.cwd.path()
    }

    /// Path of the home directory
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Create a file in the working directory
    pub fn create_file(&self, name: &str, content: &str) {
        std::fs::write(self.cwd.path().join(name), content).expect("Failed to write file");
    }

    /// Check if a file exists in the working directory
    pub fn file_exists(&self, name: &str) -> bool {
        self.cwd.path().join(name).exists()
    }

    /// Run the chroot-pbuilder binary with the given args and env overrides
    pub fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chroot-pbuilder"));
        cmd.current_dir(self.cwd.path());
        cmd.env("HOME", self.home.path());
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.args(args);
        cmd.output().expect("Failed to execute chroot-pbuilder")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an executable script that records its argv, one per line
///
/// Returns the script path; the log appears at `log` once the script runs.
#[cfg(unix)]
pub fn write_recording_script(dir: &Path, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-tool");
    let body = format!("#!/bin/sh\nprintf '%s\\n' \"$@\" >> '{}'\nexit 0\n", log.display());
    std::fs::write(&script, body).expect("Failed to write script");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
    script
}
