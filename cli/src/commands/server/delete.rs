//! # a3sm Server Delete Command
//!
//! File: cli/src/commands/server/delete.rs
//!
//! Implements `a3sm delete <name>`: recursively removes the installation
//! directory and drops it from the global server list. The record file
//! lives inside the installation directory, so removing the directory
//! removes the record with it.
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use anyhow::Context;
use clap::Parser;
use std::fs;
use tracing::info;

/// Arguments for `a3sm delete`.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of server to be deleted
    pub name: String,
}

/// Handler for `a3sm delete`.
pub fn handle_delete(args: DeleteArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling delete for server '{}'", args.name);

    let (install_dir, _record) = registry::require_server(&args.name, &ctx.config.server_list)?;

    fs::remove_dir_all(&install_dir)
        .with_context(|| format!("Failed to remove {}", install_dir.display()))?;

    ctx.config.unregister_server(&install_dir);
    ctx.persist()?;

    println!("Server '{}' deleted.", args.name);
    Ok(())
}
