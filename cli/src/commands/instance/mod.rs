//! # a3sm Instance Command Group
//!
//! File: cli/src/commands/instance/mod.rs
//!
//! ## Overview
//!
//! Router for `a3sm instance <server> {add|mods|delete|start|list}`:
//! management of the named runtime profiles (instances) inside a server
//! installation. Every subcommand is scoped to a named server; all but
//! `list` are further scoped to a named instance.
//!
//! An instance is a profile directory, a port, and an enabled subset of
//! the server's installed mods, letting one installation carry several run
//! configurations.
//!
//! ## Examples
//!
//! ```bash
//! a3sm instance "My Server" add main
//! a3sm instance "My Server" mods main enable 450814997
//! a3sm instance "My Server" start main
//! a3sm instance "My Server" list
//! a3sm instance "My Server" delete main
//! ```
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `a3sm instance <server> add` (creates an instance section).
mod add;
/// Implements `a3sm instance <server> delete` (removes an instance).
mod delete;
/// Implements `a3sm instance <server> list` (lists instances).
mod list;
/// Implements `a3sm instance <server> mods` (enable/disable/list).
mod mods;
/// Implements `a3sm instance <server> start` (launches in tmux).
mod start;

/// Arguments for the `a3sm instance` command group.
#[derive(Parser, Debug)]
pub struct InstanceArgs {
    /// Name of the server whose instances to manage
    pub name: String,

    #[command(subcommand)]
    command: InstanceCommand,
}

/// Subcommands of `a3sm instance <server>`.
#[derive(Subcommand, Debug)]
enum InstanceCommand {
    /// Create a new instance
    Add(add::AddArgs),
    /// Manage an instance's enabled mods
    Mods(mods::ModsArgs),
    /// Delete an instance and its profile directory
    Delete(delete::DeleteArgs),
    /// Start an instance inside a detached tmux session
    Start(start::StartArgs),
    /// List this server's instances
    List(list::ListArgs),
}

/// Entry point for the `a3sm instance` command group.
pub fn handle_instance(args: InstanceArgs, ctx: &mut AppContext) -> Result<()> {
    match args.command {
        InstanceCommand::Add(sub) => add::handle_add(&args.name, sub, ctx),
        InstanceCommand::Mods(sub) => mods::handle_mods(&args.name, sub, ctx),
        InstanceCommand::Delete(sub) => delete::handle_delete(&args.name, sub, ctx),
        InstanceCommand::Start(sub) => start::handle_start(&args.name, sub, ctx),
        InstanceCommand::List(sub) => list::handle_list(&args.name, sub, ctx),
    }
}
