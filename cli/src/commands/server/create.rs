//! # a3sm Server Create Command
//!
//! File: cli/src/commands/server/create.rs
//!
//! ## Overview
//!
//! Implements `a3sm create <name>`: provisions a new dedicated server
//! installation and registers it in the global configuration.
//!
//! ## Workflow
//!
//! 1. Refuse a name that already resolves in the registry.
//! 2. Obtain Steam credentials (saved config or prompt; `--save` persists
//!    prompted values).
//! 3. Prompt for the installation directory (tilde-expanded) and create it.
//! 4. Run steamcmd to install the server application; a non-zero exit
//!    aborts and is forwarded as this process's exit code.
//! 5. Write the installation's `server.ini` (name, path, empty mod set)
//!    and append the directory to the global server list.
//!
//! A failure after the directory was created is not rolled back; the user
//! re-runs or cleans up by hand.
//!
use crate::common::{fs as afs, steam, ui::prompts};
use crate::core::config::{AppContext, ServerRecord};
use crate::core::error::{A3smError, Result};
use crate::core::registry;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `a3sm create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of server to be created
    pub name: String,
}

/// Handler for `a3sm create`.
pub fn handle_create(args: CreateArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling create for server '{}'", args.name);

    if registry::find_server(&args.name, &ctx.config.server_list)?.is_some() {
        anyhow::bail!(A3smError::Config(format!(
            "Server '{}' already exists.",
            args.name
        )));
    }

    let creds = steam::resolve_credentials(&ctx.config.steam)?;
    if ctx.save_credentials {
        ctx.remember_credentials(&creds.user, &creds.password);
    }

    let dir_input = prompts::prompt_line("Installation directory for server?")?;
    if dir_input.is_empty() {
        anyhow::bail!(A3smError::Config(
            "Installation directory must not be empty.".into()
        ));
    }
    let install_dir = PathBuf::from(shellexpand::tilde(&dir_input).into_owned());
    afs::ensure_dir_exists(&install_dir)?;

    steam::update_server(&creds, &install_dir)?;

    let record = ServerRecord::new(&args.name, &install_dir);
    record
        .save_in(&install_dir)
        .with_context(|| format!("Failed to record server '{}'", args.name))?;

    ctx.config.register_server(install_dir);
    ctx.persist()?;

    println!("Server installed successfully");
    Ok(())
}
