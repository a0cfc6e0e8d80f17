//! # a3sm Mods List Command
//!
//! File: cli/src/commands/mods/list.rs
//!
//! Implements `a3sm mods <server> list`: prints the installed workshop mod
//! IDs of a named server, one per line.
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use clap::Parser;
use tracing::info;

/// Arguments for `a3sm mods <server> list`. Takes no options; the struct
/// exists for structural consistency within the clap command tree.
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// Handler for `a3sm mods <server> list`.
pub fn handle_list(server: &str, _args: ListArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling mods list for server '{}'", server);

    let (_install_dir, record) = registry::require_server(server, &ctx.config.server_list)?;

    if record.mods.is_empty() {
        println!("No mods installed on '{}'.", server);
        return Ok(());
    }

    println!("Installed mods on '{}':", server);
    for mod_id in &record.mods {
        println!("  {mod_id}");
    }
    Ok(())
}
