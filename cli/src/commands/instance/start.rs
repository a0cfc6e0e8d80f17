//! # a3sm Instance Start Command
//!
//! File: cli/src/commands/instance/start.rs
//!
//! ## Overview
//!
//! Implements `a3sm instance <server> start <instance>`: builds the
//! dedicated server's argument vector for the instance (config path under
//! the profile directory, port, profile directory, semicolon-joined
//! relative mod paths) and launches it inside a detached tmux session
//! whose working directory is the installation directory.
//!
//! The launch is fire and forget: the server process is owned by tmux, not
//! by this tool. Attach with `tmux attach -t <session>` to reach the
//! server console.
//!
use crate::common::{launch, steam};
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use clap::Parser;
use tracing::info;

/// Arguments for `a3sm instance <server> start`.
#[derive(Parser, Debug)]
pub struct StartArgs {
    /// Name of the instance to start
    pub instance: String,
}

/// Handler for `a3sm instance <server> start`.
pub fn handle_start(server: &str, args: StartArgs, ctx: &mut AppContext) -> Result<()> {
    info!(
        "Handling instance start '{}' on server '{}'",
        args.instance, server
    );

    let (install_dir, record) = registry::require_server(server, &ctx.config.server_list)?;
    let instance = registry::require_instance(&record, &args.instance)?;

    let mod_paths: Vec<String> = instance
        .mods
        .iter()
        .map(|mod_id| steam::mod_relative_path(mod_id))
        .collect();
    let server_args = launch::server_args(instance, &mod_paths);
    let session = launch::session_name(server, &args.instance);

    launch::start_in_tmux(&install_dir, &session, &server_args)?;

    println!(
        "Started instance '{}' in tmux session '{}'.",
        args.instance, session
    );
    Ok(())
}
