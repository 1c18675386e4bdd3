//! Isolated data directories and command builders

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestHome {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A `linguaspark` command pointed at this data directory, with
    /// assert_cmd's `assert`/`write_stdin` available on it
    pub fn cmd(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("linguaspark")?;
        cmd.arg("--data-dir").arg(&self.path);
        Ok(cmd)
    }

    /// Run a command that is expected to succeed
    pub fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        self.cmd()?.args(args).assert().success();
        Ok(())
    }

    /// Run `export` and parse the JSON it prints
    pub fn export_json(&self) -> anyhow::Result<serde_json::Value> {
        let output = self.cmd()?.arg("export").output()?;
        assert!(output.status.success());
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

pub fn setup_test_home() -> anyhow::Result<TestHome> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("linguaspark");
    Ok(TestHome { temp_dir, path })
}
