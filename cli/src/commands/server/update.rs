//! # a3sm Server Update Command
//!
//! File: cli/src/commands/server/update.rs
//!
//! ## Overview
//!
//! Implements `a3sm update <name>`: re-runs steamcmd for an existing
//! installation. By default both the server application and every
//! installed mod are refreshed; `--mods-only` and `--server-only` narrow
//! the run to one half (the flags are mutually exclusive).
//!
//! Mod downloads happen in the recorded order within a single steamcmd
//! invocation, and each refreshed mod's content directory goes through the
//! lowercase normalization pass again (updates can reintroduce mixed-case
//! entries).
//!
use crate::common::{fs as afs, steam};
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use clap::Parser;
use tracing::{info, warn};

/// Arguments for `a3sm update`.
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Name of server to be updated
    pub name: String,

    /// Only update mods
    #[arg(long, conflicts_with = "server_only")]
    pub mods_only: bool,

    /// Only update server
    #[arg(long)]
    pub server_only: bool,
}

/// Handler for `a3sm update`.
pub fn handle_update(args: UpdateArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling update for server '{}'", args.name);

    let (install_dir, record) = registry::require_server(&args.name, &ctx.config.server_list)?;

    let creds = steam::resolve_credentials(&ctx.config.steam)?;
    if ctx.save_credentials {
        ctx.remember_credentials(&creds.user, &creds.password);
        ctx.persist()?;
    }

    if !args.mods_only {
        steam::update_server(&creds, &install_dir)?;
        println!("Server updated successfully");
    }

    if !args.server_only {
        if record.mods.is_empty() {
            info!("Server '{}' has no installed mods to update", args.name);
        } else {
            let mods: Vec<String> = record.mods.iter().cloned().collect();
            steam::download_mods(&creds, &mods, &install_dir)?;
            for mod_id in &mods {
                let failures = afs::normalize_case(&steam::mod_content_dir(&install_dir, mod_id))?;
                for failure in failures {
                    warn!(
                        "Could not rename {}: {}",
                        failure.path.display(),
                        failure.error
                    );
                }
            }
            println!("Mods updated successfully");
        }
    }

    Ok(())
}
