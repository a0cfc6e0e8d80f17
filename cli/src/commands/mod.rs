//! # a3sm Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command groups that make up the a3sm CLI and
//! exposes them to the entry point in `main.rs`.
//!
//! ## Command Groups
//!
//! - `server`: lifecycle of server installations (`create`, `update`,
//!   `delete` are top-level verbs on the CLI surface)
//! - `mods`: the installed workshop mod set of a named server (`add`,
//!   `delete`, `list`)
//! - `instance`: named runtime profiles within a server (`add`, `mods`,
//!   `delete`, `start`, `list`)
//!
//! Each group defines its own clap argument structures and a `handle_*`
//! function; handlers share state only through the configuration store and
//! the registry, never through each other.
//!

/// Installed-mod management for a named server: `add`, `delete`, `list`.
pub mod mods;
/// Server installation lifecycle: `create`, `update`, `delete`.
pub mod server;
/// Instance management within a server: `add`, `mods`, `delete`, `start`, `list`.
pub mod instance;
