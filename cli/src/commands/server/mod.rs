//! # a3sm Server Command Group
//!
//! File: cli/src/commands/server/mod.rs
//!
//! ## Overview
//!
//! Lifecycle commands for server installations. Unlike the `mods` and
//! `instance` groups, these appear as top-level verbs on the CLI surface
//! (`a3sm create`, `a3sm update`, `a3sm delete`), so this module only
//! declares the submodules; routing happens in `main.rs`.
//!
//! ## Examples
//!
//! ```bash
//! # Provision a new installation (prompts for credentials and directory)
//! a3sm create "My Server"
//!
//! # Re-run steamcmd for the server application and all installed mods
//! a3sm update "My Server"
//!
//! # Only refresh the installed mods
//! a3sm update "My Server" --mods-only
//!
//! # Remove the installation and deregister it
//! a3sm delete "My Server"
//! ```
//!

/// Implements `a3sm create` (provisions a new installation).
pub mod create;
/// Implements `a3sm delete` (removes an installation).
pub mod delete;
/// Implements `a3sm update` (re-fetches server and/or mods).
pub mod update;
