//! # a3sm Instance Delete Command
//!
//! File: cli/src/commands/instance/delete.rs
//!
//! Implements `a3sm instance <server> delete <instance>`: removes the
//! instance's section from the server record and recursively removes its
//! profile directory. The installation itself and the workshop cache are
//! untouched.
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use clap::Parser;
use std::fs;
use tracing::{info, warn};

/// Arguments for `a3sm instance <server> delete`.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the instance to delete
    pub instance: String,
}

/// Handler for `a3sm instance <server> delete`.
pub fn handle_delete(server: &str, args: DeleteArgs, ctx: &mut AppContext) -> Result<()> {
    info!(
        "Handling instance delete '{}' on server '{}'",
        args.instance, server
    );

    let (install_dir, mut record) = registry::require_server(server, &ctx.config.server_list)?;
    let instance = registry::require_instance(&record, &args.instance)?;

    let profile_dir = instance.path.clone();
    if profile_dir.exists() {
        if let Err(error) = fs::remove_dir_all(&profile_dir) {
            // The record removal still goes through; the directory can be
            // cleaned up by hand.
            warn!("Could not remove {}: {}", profile_dir.display(), error);
        }
    }

    record.instances.remove(&args.instance);
    record.save_in(&install_dir)?;

    println!("Instance '{}' deleted from '{}'.", args.instance, server);
    Ok(())
}
