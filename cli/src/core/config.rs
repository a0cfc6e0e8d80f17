//! # a3sm Configuration Store
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration store for a3sm: the global
//! `a3sm.ini` file that records Steam credentials and the list of known
//! server installations, and the per-installation `server.ini` record that
//! holds the server's display name, path, installed mod set, and instance
//! sections.
//!
//! ## Architecture
//!
//! Both files are plain INI (sections of string key/value pairs), read and
//! written with the `rust-ini` crate. The design follows these rules:
//! - A missing file is an empty configuration, never an error
//! - A malformed file is a parse error, propagated to the caller
//! - `save` overwrites the whole file; there is no merging and no
//!   file-level transaction beyond the single write
//! - Set-valued keys (the server list, mod sets) are comma-joined strings;
//!   the empty set is the empty string, and splitting the empty string
//!   yields the empty set rather than a set containing `""`
//!
//! Element values must never themselves contain a comma. This is a
//! documented constraint of the exchange format, not enforced here; in
//! practice mod IDs are numeric and paths without commas are assumed.
//!
//! ## File Layout
//!
//! Global `a3sm.ini` (working directory):
//!
//! ```ini
//! [steam]
//! user = alice
//! password = hunter2
//!
//! [state]
//! serverlist = /srv/one,/srv/two
//! ```
//!
//! Per-server `server.ini` (inside the installation directory):
//!
//! ```ini
//! [general]
//! name = Test
//! path = /srv/test
//!
//! [server]
//! mods = 450814997,843425103
//!
//! [myinstance]
//! path = /srv/test/instances/myinstance
//! port = 2302
//! mods = 450814997
//! ```
//!
//! Every section other than `general` and `server` is an instance record,
//! which is why those two names are reserved and rejected as instance
//! names.
//!
use crate::core::error::{A3smError, Result};
use anyhow::{anyhow, Context};
use ini::Ini;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the global configuration file, looked up in the working directory.
pub const GLOBAL_CONFIG_FILENAME: &str = "a3sm.ini";

/// Name of the per-installation record file inside each server directory.
pub const SERVER_CONFIG_FILENAME: &str = "server.ini";

/// Section names with fixed meaning inside a server record. Instance
/// sections are "everything else", so these can never be instance names.
pub const RESERVED_SECTION_NAMES: &[&str] = &["general", "server"];

/// Default game port for a new instance.
pub const DEFAULT_PORT: u16 = 2302;

// --- Set codec ---

/// Joins a set into the comma-separated on-disk representation.
/// The empty set becomes the empty string.
pub fn join_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(",")
}

/// Splits the comma-separated on-disk representation back into a set.
///
/// Empty entries are dropped, so both the empty string and stray
/// artifacts like `"a,,b"` or a leading comma never produce a `""`
/// element in the set.
pub fn split_set(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

// --- Global configuration ---

/// Steam credentials as stored in (or absent from) the `[steam]` section.
///
/// Either field may be present independently; a handler that needs a full
/// pair prompts for whichever half is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SteamAuth {
    pub user: Option<String>,
    pub password: Option<String>,
}

/// The process-wide configuration: credentials plus the ordered list of
/// known server installation directories.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    pub steam: SteamAuth,
    /// Installation directories, in registration order. Lookup by name
    /// scans these in order and returns the first match.
    pub server_list: Vec<PathBuf>,
}

impl GlobalConfig {
    /// Loads the global configuration from `path`.
    ///
    /// A missing file yields the default (empty) configuration. A file
    /// that exists but cannot be parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Global config {} not found, starting empty", path.display());
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;

        let mut cfg = Self::default();
        if let Some(steam) = ini.section(Some("steam")) {
            cfg.steam.user = steam.get("user").map(str::to_string);
            cfg.steam.password = steam.get("password").map(str::to_string);
        }
        if let Some(state) = ini.section(Some("state")) {
            if let Some(list) = state.get("serverlist") {
                cfg.server_list = list
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(PathBuf::from)
                    .collect();
            }
        }
        Ok(cfg)
    }

    /// Saves the global configuration to `path`, overwriting it.
    ///
    /// The `[steam]` section is written only for values actually present,
    /// so credentials entered interactively without `--save` (and thus
    /// never placed into this struct) stay off disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut ini = Ini::new();
        if let Some(user) = &self.steam.user {
            ini.with_section(Some("steam")).set("user", user);
        }
        if let Some(password) = &self.steam.password {
            ini.with_section(Some("steam")).set("password", password);
        }
        let list = self
            .server_list
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(",");
        ini.with_section(Some("state")).set("serverlist", list);
        ini.write_to_file(path)
            .with_context(|| format!("Failed to write configuration file {}", path.display()))?;
        debug!("Wrote global config to {}", path.display());
        Ok(())
    }

    /// Registers an installation directory, keeping the list duplicate-free.
    pub fn register_server(&mut self, dir: PathBuf) {
        if !self.server_list.contains(&dir) {
            self.server_list.push(dir);
        }
    }

    /// Removes an installation directory from the registry list.
    pub fn unregister_server(&mut self, dir: &Path) {
        self.server_list.retain(|entry| entry != dir);
    }
}

/// Everything a command handler needs from startup: the loaded global
/// configuration, the path it persists to, and whether credentials entered
/// interactively during this run should be written back.
///
/// Constructed once in `main` and threaded through the handlers; there is
/// no ambient global state.
#[derive(Debug)]
pub struct AppContext {
    pub config: GlobalConfig,
    pub config_path: PathBuf,
    pub save_credentials: bool,
}

impl AppContext {
    /// Writes the global configuration back to disk.
    pub fn persist(&self) -> Result<()> {
        self.config.save(&self.config_path)
    }

    /// Places interactively entered credentials into the configuration so
    /// the next [`AppContext::persist`] writes them. Only called when the
    /// user passed `--save`.
    pub fn remember_credentials(&mut self, user: &str, password: &str) {
        self.config.steam.user = Some(user.to_string());
        self.config.steam.password = Some(password.to_string());
    }
}

// --- Server record ---

/// One named runtime profile within a server installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Profile directory holding this instance's `server.cfg` and profiles.
    pub path: PathBuf,
    /// Game port; defaults to 2302 at creation.
    pub port: u16,
    /// Enabled mod IDs, always a subset of the owning server's mod set.
    pub mods: BTreeSet<String>,
}

/// One server installation's record, persisted as `server.ini` in its
/// installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    /// Display name, the lookup key from the global registry. Unique
    /// across the server list; lookup returns the first match.
    pub name: String,
    /// Absolute installation directory. Redundant with the record's own
    /// location, kept for portability of the file.
    pub path: PathBuf,
    /// Workshop mod IDs fetched into this installation's content cache.
    pub mods: BTreeSet<String>,
    /// Instance sections, keyed by instance name.
    pub instances: BTreeMap<String, InstanceRecord>,
}

impl ServerRecord {
    /// A fresh record for a newly provisioned installation: no mods, no
    /// instances.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            mods: BTreeSet::new(),
            instances: BTreeMap::new(),
        }
    }

    /// Path of the record file inside an installation directory.
    pub fn file_path(install_dir: &Path) -> PathBuf {
        install_dir.join(SERVER_CONFIG_FILENAME)
    }

    /// Loads a server record from its file.
    ///
    /// Unlike [`GlobalConfig::load`], a missing record file is an error
    /// here: callers that treat absence as "not a match" check existence
    /// first (see the registry scan).
    pub fn load(path: &Path) -> Result<Self> {
        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to parse server record {}", path.display()))?;

        let general = ini.section(Some("general")).ok_or_else(|| {
            anyhow!(A3smError::Config(format!(
                "Server record {} has no [general] section",
                path.display()
            )))
        })?;
        let name = general
            .get("name")
            .ok_or_else(|| {
                anyhow!(A3smError::Config(format!(
                    "Server record {} has no name",
                    path.display()
                )))
            })?
            .to_string();
        let install_path = general
            .get("path")
            .map(PathBuf::from)
            .ok_or_else(|| {
                anyhow!(A3smError::Config(format!(
                    "Server record {} has no path",
                    path.display()
                )))
            })?;

        let mods = ini
            .section(Some("server"))
            .and_then(|server| server.get("mods"))
            .map(split_set)
            .unwrap_or_default();

        let mut instances = BTreeMap::new();
        for (section, props) in ini.iter() {
            let section = match section {
                Some(name) if !RESERVED_SECTION_NAMES.contains(&name) => name,
                _ => continue,
            };
            let inst_path = props.get("path").map(PathBuf::from).ok_or_else(|| {
                anyhow!(A3smError::Config(format!(
                    "Instance '{}' in {} has no path",
                    section,
                    path.display()
                )))
            })?;
            let port = match props.get("port") {
                Some(value) => value.parse::<u16>().map_err(|_| {
                    anyhow!(A3smError::Config(format!(
                        "Instance '{}' in {} has an invalid port '{}'",
                        section,
                        path.display(),
                        value
                    )))
                })?,
                None => DEFAULT_PORT,
            };
            let inst_mods = props.get("mods").map(split_set).unwrap_or_default();
            instances.insert(
                section.to_string(),
                InstanceRecord {
                    path: inst_path,
                    port,
                    mods: inst_mods,
                },
            );
        }

        Ok(Self {
            name,
            path: install_path,
            mods,
            instances,
        })
    }

    /// Saves the record as `server.ini` inside `install_dir`, overwriting
    /// the previous file.
    ///
    /// The directory comes from the caller (normally the registry lookup),
    /// not from the record's own `path` key: a stale key in a hand-edited
    /// or moved installation must not divert the write away from the file
    /// the registry reads.
    pub fn save_in(&self, install_dir: &Path) -> Result<()> {
        self.save_to(&Self::file_path(install_dir))
    }

    /// Saves the record to an explicit file path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut ini = Ini::new();
        ini.with_section(Some("general"))
            .set("name", &self.name)
            .set("path", self.path.to_string_lossy().into_owned());
        ini.with_section(Some("server"))
            .set("mods", join_set(&self.mods));
        for (name, instance) in &self.instances {
            ini.with_section(Some(name.as_str()))
                .set("path", instance.path.to_string_lossy().into_owned())
                .set("port", instance.port.to_string())
                .set("mods", join_set(&instance.mods));
        }
        ini.write_to_file(path)
            .with_context(|| format!("Failed to write server record {}", path.display()))?;
        debug!("Wrote server record to {}", path.display());
        Ok(())
    }
}
