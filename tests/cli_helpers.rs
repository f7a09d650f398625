#![allow(dead_code)]

use anyhow::{bail, Result};
use assert_cmd::cargo;
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Config home inside the temp dir, so no user config leaks into tests
pub fn config_root_for_home(home: &TempDir) -> PathBuf {
    home.path().join(".config")
}

pub fn base_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("retention-roi"));
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", config_root_for_home(home));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--no-color");
    cmd
}

pub fn write_default_config(home: &TempDir, contents: &str) -> PathBuf {
    let dir = config_root_for_home(home).join("retention-roi");
    std::fs::create_dir_all(&dir).expect("failed to create config dir");
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).expect("failed to write config");
    path
}

pub fn run_cmd(home: &TempDir, args: &[&str]) -> Result<Output> {
    let mut cmd = base_cmd(home);
    cmd.args(args);
    let output = cmd.output()?;
    if !output.status.success() {
        bail!(
            "command failed: {:?}\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn run_json(home: &TempDir, args: &[&str]) -> Result<Value> {
    let mut full_args = vec!["--json"];
    full_args.extend_from_slice(args);
    let output = run_cmd(home, &full_args)?;
    Ok(serde_json::from_slice(&output.stdout)?)
}
