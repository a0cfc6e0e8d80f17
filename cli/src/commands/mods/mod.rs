//! # a3sm Mods Command Group
//!
//! File: cli/src/commands/mods/mod.rs
//!
//! ## Overview
//!
//! Router for `a3sm mods <server> {add|delete|list}`: management of a
//! server installation's installed workshop mod set. All subcommands are
//! scoped to a named server, which is resolved through the registry before
//! any mod logic runs.
//!
//! ## Examples
//!
//! ```bash
//! # Add by workshop URL. A raw ID only resolves once it is already in
//! # the installed set, so new mods are referenced by their page URL.
//! a3sm mods "My Server" add "https://steamcommunity.com/sharedfiles/filedetails/?id=450814997"
//!
//! # Remove installed mods (raw IDs work here, the mod is installed)
//! a3sm mods "My Server" delete 450814997
//!
//! # Show the installed set
//! a3sm mods "My Server" list
//! ```
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `a3sm mods <server> add` (download and register mods).
mod add;
/// Implements `a3sm mods <server> delete` (deregister and remove mods).
mod delete;
/// Implements `a3sm mods <server> list` (print the installed set).
mod list;

/// Arguments for the `a3sm mods` command group.
#[derive(Parser, Debug)]
pub struct ModsArgs {
    /// Name of the server whose mods to manage
    pub name: String,

    #[command(subcommand)]
    command: ModsCommand,
}

/// Subcommands of `a3sm mods <server>`.
#[derive(Subcommand, Debug)]
enum ModsCommand {
    /// Download workshop mods and add them to the installed set
    Add(add::AddArgs),
    /// Remove mods from the installed set (and from all instances)
    Delete(delete::DeleteArgs),
    /// List the installed mod IDs
    List(list::ListArgs),
}

/// Entry point for the `a3sm mods` command group.
pub fn handle_mods(args: ModsArgs, ctx: &mut AppContext) -> Result<()> {
    match args.command {
        ModsCommand::Add(sub) => add::handle_add(&args.name, sub, ctx),
        ModsCommand::Delete(sub) => delete::handle_delete(&args.name, sub, ctx),
        ModsCommand::List(sub) => list::handle_list(&args.name, sub, ctx),
    }
}
