//! # a3sm CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each
//! other `.rs` file in this directory is compiled as a separate test crate
//! that runs the real `a3sm` binary.
//!
//! The interesting part is the fake external-tool setup: a3sm refuses to
//! run unless `steamcmd` and `tmux` resolve on PATH, and several commands
//! invoke them. The helpers here drop small shell scripts into a temporary
//! `bin/` directory that record their argument vectors to a log file and
//! exit 0 (or a chosen code), so tests can drive full command flows and
//! assert on the exact invocations without Steam or tmux installed.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates an `assert_cmd::Command` for the compiled `a3sm` binary.
pub fn a3sm_cmd() -> Command {
    Command::cargo_bin("a3sm").expect("Failed to find a3sm binary for testing")
}

/// A temporary working directory with fake `steamcmd`/`tmux` executables
/// on a private PATH, plus helpers to inspect what they were called with.
pub struct TestEnv {
    pub root: tempfile::TempDir,
    pub bin_dir: PathBuf,
}

impl TestEnv {
    /// Sets up the directory layout and the fake tools (both exiting 0).
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let env = Self { root, bin_dir };
        env.install_fake_tool("steamcmd", 0);
        env.install_fake_tool("tmux", 0);
        env
    }

    /// Working directory the a3sm binary should run in (where `a3sm.ini`
    /// lives).
    pub fn cwd(&self) -> &Path {
        self.root.path()
    }

    /// Writes a fake tool script that appends its argument vector to
    /// `<bin>/<name>.log` and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_fake_tool(&self, name: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.bin_dir.join(name);
        let log = self.bin_dir.join(format!("{name}.log"));
        let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n", log.display(), exit_code);
        fs::write(&path, script).expect("Failed to write fake tool");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod fake tool");
    }

    #[cfg(not(unix))]
    pub fn install_fake_tool(&self, _name: &str, _exit_code: i32) {
        unimplemented!("fake tool scripts require a unix shell");
    }

    /// Returns everything a fake tool has been invoked with so far, or an
    /// empty string when it was never called.
    pub fn tool_log(&self, name: &str) -> String {
        fs::read_to_string(self.bin_dir.join(format!("{name}.log"))).unwrap_or_default()
    }

    /// A command for the a3sm binary wired to this environment: cwd at the
    /// temp root and PATH restricted to the fake tools.
    pub fn cmd(&self) -> Command {
        let mut cmd = a3sm_cmd();
        cmd.current_dir(self.cwd());
        cmd.env("PATH", &self.bin_dir);
        cmd
    }

    /// Writes a global `a3sm.ini` with saved credentials and the given
    /// server list.
    pub fn write_global_config(&self, server_dirs: &[&Path]) {
        let list = server_dirs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(",");
        let content = format!(
            "[steam]\nuser=alice\npassword=hunter2\n\n[state]\nserverlist={list}\n"
        );
        fs::write(self.cwd().join("a3sm.ini"), content).expect("Failed to write a3sm.ini");
    }

    /// Provisions a fake installation directory with a `server.ini` record
    /// and returns its path.
    pub fn write_server(&self, dir_name: &str, server_name: &str, mods: &[&str]) -> PathBuf {
        let dir = self.cwd().join(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create server dir");
        let content = format!(
            "[general]\nname={}\npath={}\n\n[server]\nmods={}\n",
            server_name,
            dir.display(),
            mods.join(",")
        );
        fs::write(dir.join("server.ini"), content).expect("Failed to write server.ini");
        dir
    }

    /// Appends an instance section to an existing `server.ini`.
    pub fn write_instance(&self, server_dir: &Path, name: &str, port: u16, mods: &[&str]) {
        let record = server_dir.join("server.ini");
        let mut content = fs::read_to_string(&record).expect("Failed to read server.ini");
        content.push_str(&format!(
            "\n[{}]\npath={}\nport={}\nmods={}\n",
            name,
            server_dir.join("instances").join(name).display(),
            port,
            mods.join(",")
        ));
        fs::write(&record, content).expect("Failed to write server.ini");
    }
}
