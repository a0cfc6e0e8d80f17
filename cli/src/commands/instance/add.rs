//! # a3sm Instance Add Command
//!
//! File: cli/src/commands/instance/add.rs
//!
//! ## Overview
//!
//! Implements `a3sm instance <server> add <instance>`: creates an instance
//! section in the server's record and provisions its profile directory.
//!
//! The instance name becomes an INI section name, so `general` and
//! `server` (the two reserved sections of a record) are rejected, as are
//! names that already exist. The profile directory defaults to
//! `<install>/instances/<instance>` and the port to 2302; both can be
//! overridden with flags.
//!
use crate::common::fs as afs;
use crate::core::config::{AppContext, InstanceRecord, DEFAULT_PORT, RESERVED_SECTION_NAMES};
use crate::core::error::{A3smError, Result};
use crate::core::registry;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `a3sm instance <server> add`.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the instance to create
    pub instance: String,

    /// Game port for the instance
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Profile directory (defaults to <install>/instances/<instance>)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Handler for `a3sm instance <server> add`.
pub fn handle_add(server: &str, args: AddArgs, ctx: &mut AppContext) -> Result<()> {
    info!(
        "Handling instance add '{}' on server '{}'",
        args.instance, server
    );

    if RESERVED_SECTION_NAMES.contains(&args.instance.as_str()) {
        anyhow::bail!(A3smError::Config(format!(
            "'{}' is a reserved name and cannot be used for an instance.",
            args.instance
        )));
    }

    let (install_dir, mut record) = registry::require_server(server, &ctx.config.server_list)?;

    if record.instances.contains_key(&args.instance) {
        anyhow::bail!(A3smError::Config(format!(
            "Instance '{}' already exists on server '{}'.",
            args.instance, server
        )));
    }

    let profile_dir = args
        .path
        .unwrap_or_else(|| install_dir.join("instances").join(&args.instance));
    afs::ensure_dir_exists(&profile_dir)?;

    record.instances.insert(
        args.instance.clone(),
        InstanceRecord {
            path: profile_dir,
            port: args.port,
            mods: Default::default(),
        },
    );
    record.save_in(&install_dir)?;

    println!("Instance '{}' added to '{}'.", args.instance, server);
    Ok(())
}
