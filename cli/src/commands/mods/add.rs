//! # a3sm Mods Add Command
//!
//! File: cli/src/commands/mods/add.rs
//!
//! ## Overview
//!
//! Implements `a3sm mods <server> add <mod>...`: resolves each token (raw
//! workshop ID or workshop URL), downloads the items with steamcmd in
//! input order, lowercases every entry of each downloaded mod's content
//! directory, and records the IDs in the server's installed set.
//!
//! Resolution on this path deliberately does not require the resolved ID
//! to already be installed: a mod being added is expected to be new.
//! Rename failures during the lowercase pass are reported as warnings and
//! never abort the command.
//!
use crate::common::{fs as afs, steam};
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::{modref, registry};
use clap::Parser;
use tracing::{info, warn};

/// Arguments for `a3sm mods <server> add`.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Mod IDs or workshop URLs to download and install
    #[arg(required = true)]
    pub mods: Vec<String>,
}

/// Handler for `a3sm mods <server> add`.
pub fn handle_add(server: &str, args: AddArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling mods add for server '{}'", server);

    let (install_dir, mut record) = registry::require_server(server, &ctx.config.server_list)?;

    // Resolve every token before touching steamcmd, preserving input
    // order and dropping duplicates.
    let mut mod_ids: Vec<String> = Vec::new();
    for token in &args.mods {
        let id = modref::resolve(token, &record.mods)?;
        if !mod_ids.contains(&id) {
            mod_ids.push(id);
        }
    }

    let creds = steam::resolve_credentials(&ctx.config.steam)?;
    if ctx.save_credentials {
        ctx.remember_credentials(&creds.user, &creds.password);
        ctx.persist()?;
    }

    steam::download_mods(&creds, &mod_ids, &install_dir)?;

    for mod_id in &mod_ids {
        let content_dir = steam::mod_content_dir(&install_dir, mod_id);
        let failures = afs::normalize_case(&content_dir)?;
        for failure in failures {
            warn!(
                "Could not rename {}: {}",
                failure.path.display(),
                failure.error
            );
        }
        record.mods.insert(mod_id.clone());
    }
    record.save_in(&install_dir)?;

    println!("Added {} mod(s) to '{}'.", mod_ids.len(), server);
    Ok(())
}
