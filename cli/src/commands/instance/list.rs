//! # a3sm Instance List Command
//!
//! File: cli/src/commands/instance/list.rs
//!
//! Implements `a3sm instance <server> list`: prints each instance of a
//! server with its port, enabled-mod count, and profile directory.
//!
use crate::core::config::AppContext;
use crate::core::error::Result;
use crate::core::registry;
use clap::Parser;
use tracing::info;

/// Arguments for `a3sm instance <server> list`. No options.
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// Handler for `a3sm instance <server> list`.
pub fn handle_list(server: &str, _args: ListArgs, ctx: &mut AppContext) -> Result<()> {
    info!("Handling instance list for server '{}'", server);

    let (_install_dir, record) = registry::require_server(server, &ctx.config.server_list)?;

    if record.instances.is_empty() {
        println!("No instances on '{}'.", server);
        return Ok(());
    }

    println!("Instances on '{}':", server);
    for (name, instance) in &record.instances {
        println!(
            "  {:<16} port {:<6} {} mod(s)  {}",
            name,
            instance.port,
            instance.mods.len(),
            instance.path.display()
        );
    }
    Ok(())
}
