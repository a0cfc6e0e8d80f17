//! # a3sm Instance Mods Command
//!
//! File: cli/src/commands/instance/mods.rs
//!
//! ## Overview
//!
//! Implements `a3sm instance <server> mods <instance> {enable|disable|list}`:
//! manages which of the server's installed mods an instance loads.
//!
//! Enable and disable both resolve tokens with membership required against
//! the *server's* installed set — enabling a mod that is not installed is
//! a user error, not something to accept silently. The enabled set stays a
//! subset of the installed set by construction; enabling is a deduplicated
//! union and disabling the last mod leaves a genuinely empty set (the
//! on-disk form is the empty string, never `""` as an element).
//!
use crate::core::config::AppContext;
use crate::core::error::{A3smError, Result};
use crate::core::{modref, registry};
use clap::{Parser, Subcommand};
use tracing::info;

/// Arguments for `a3sm instance <server> mods`.
#[derive(Parser, Debug)]
pub struct ModsArgs {
    /// Name of the instance
    pub instance: String,

    #[command(subcommand)]
    command: ModsAction,
}

/// Actions on an instance's enabled mod set.
#[derive(Subcommand, Debug)]
enum ModsAction {
    /// Enable installed mods for this instance
    Enable {
        /// Installed mod IDs or workshop URLs
        #[arg(required = true)]
        mods: Vec<String>,
    },
    /// Disable mods for this instance
    Disable {
        /// Enabled mod IDs or workshop URLs
        #[arg(required = true)]
        mods: Vec<String>,
    },
    /// List this instance's enabled mods
    List,
}

/// Entry point for `a3sm instance <server> mods`.
pub fn handle_mods(server: &str, args: ModsArgs, ctx: &mut AppContext) -> Result<()> {
    let (install_dir, mut record) = registry::require_server(server, &ctx.config.server_list)?;
    // Validate the instance exists before resolving any mod tokens.
    registry::require_instance(&record, &args.instance)?;

    match args.command {
        ModsAction::Enable { mods } => {
            info!("Enabling mods on '{}/{}'", server, args.instance);
            let installed = record.mods.clone();
            let mut resolved = Vec::new();
            for token in &mods {
                resolved.push(modref::resolve_installed(token, &installed)?);
            }
            let instance = record.instances.get_mut(&args.instance).ok_or_else(|| {
                A3smError::InstanceNotFound {
                    server: server.to_string(),
                    name: args.instance.clone(),
                }
            })?;
            instance.mods.extend(resolved);
            record.save_in(&install_dir)?;
            println!("Enabled {} mod(s) on '{}'.", mods.len(), args.instance);
        }
        ModsAction::Disable { mods } => {
            info!("Disabling mods on '{}/{}'", server, args.instance);
            let installed = record.mods.clone();
            let mut resolved = Vec::new();
            for token in &mods {
                resolved.push(modref::resolve_installed(token, &installed)?);
            }
            let instance = record.instances.get_mut(&args.instance).ok_or_else(|| {
                A3smError::InstanceNotFound {
                    server: server.to_string(),
                    name: args.instance.clone(),
                }
            })?;
            for mod_id in &resolved {
                instance.mods.remove(mod_id);
            }
            record.save_in(&install_dir)?;
            println!("Disabled {} mod(s) on '{}'.", mods.len(), args.instance);
        }
        ModsAction::List => {
            let instance = registry::require_instance(&record, &args.instance)?;
            if instance.mods.is_empty() {
                println!("No mods enabled on '{}'.", args.instance);
            } else {
                println!("Enabled mods on '{}':", args.instance);
                for mod_id in &instance.mods {
                    println!("  {mod_id}");
                }
            }
        }
    }
    Ok(())
}
