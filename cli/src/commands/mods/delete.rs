//! # a3sm Mods Delete Command
//!
//! File: cli/src/commands/mods/delete.rs
//!
//! ## Overview
//!
//! Implements `a3sm mods <server> delete <mod>...`: resolves each token
//! with membership required (deleting a mod that is not installed is a
//! user error), removes the IDs from the installed set and from every
//! instance's enabled set (keeping the enabled-subset invariant intact),
//! and best-effort removes the mod's content directory from the workshop
//! cache.
//!
use crate::common::steam;
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::{modref, registry};
use clap::Parser;
use std::fs;
use tracing::{info, warn};

/// Arguments for `a3sm mods <server> delete`.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Installed mod IDs or workshop URLs to remove
    #[arg(required = true)]
    pub mods: Vec<String>,
}

/// Handler for `a3sm mods <server> delete`.
pub fn handle_delete(server: &str, args: DeleteArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling mods delete for server '{}'", server);

    let (install_dir, mut record) = registry::require_server(server, &ctx.config.server_list)?;

    let mut mod_ids: Vec<String> = Vec::new();
    for token in &args.mods {
        let id = modref::resolve_installed(token, &record.mods)?;
        if !mod_ids.contains(&id) {
            mod_ids.push(id);
        }
    }

    for mod_id in &mod_ids {
        record.mods.remove(mod_id);
        for instance in record.instances.values_mut() {
            instance.mods.remove(mod_id);
        }
        // Content removal is best effort; the record is authoritative.
        let content_dir = steam::mod_content_dir(&install_dir, mod_id);
        if content_dir.exists() {
            if let Err(error) = fs::remove_dir_all(&content_dir) {
                warn!("Could not remove {}: {}", content_dir.display(), error);
            }
        }
    }
    record.save_in(&install_dir)?;

    println!("Removed {} mod(s) from '{}'.", mod_ids.len(), server);
    Ok(())
}
