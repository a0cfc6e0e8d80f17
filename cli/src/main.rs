//! # a3sm Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the a3sm CLI, a tool for provisioning
//! and operating Arma 3 dedicated server installations. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - A preflight check that the external collaborators (`steamcmd` and
//!   `tmux`) resolve on PATH before any subcommand logic runs
//! - Routing execution to the command handlers
//! - Mapping errors to exit codes (an external tool's non-zero exit code
//!   is forwarded verbatim; everything else exits 1)
//!
//! ## Architecture
//!
//! Each invocation runs exactly one command to completion: load the global
//! configuration, run the handler, persist any changes, exit. The loaded
//! [`AppContext`] is threaded through handlers explicitly; there is no
//! ambient global state, and handlers share nothing except what the
//! configuration store and registry put on disk.
//!
//! ## Examples
//!
//! ```bash
//! # Provision a new installation (prompts for anything missing)
//! a3sm create "My Server"
//!
//! # Persist the credentials entered during this run
//! a3sm --save create "My Server"
//!
//! # Add a mod by workshop URL and enable it on an instance
//! a3sm mods "My Server" add "https://steamcommunity.com/sharedfiles/filedetails/?id=450814997"
//! a3sm instance "My Server" add main
//! a3sm instance "My Server" mods main enable 450814997
//! a3sm instance "My Server" start main
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command group handlers (server lifecycle, mods, instances).
mod common; // Shared utilities (steamcmd, tmux launch, fs, prompts).
mod core; // Core infrastructure (errors, config store, registry, modref).

use crate::common::{launch, steam};
use crate::core::config::{AppContext, GlobalConfig, GLOBAL_CONFIG_FILENAME};
use crate::core::error::{A3smError, Result};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "a3sm",
    about = "a3sm: Arma 3 dedicated server provisioning and instance management",
    long_about = "Provision Arma 3 dedicated servers with steamcmd, manage workshop mods\n\
                  and run instances, and launch them inside detached tmux sessions.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Persist credentials entered during this run into the configuration
    #[arg(long, global = true)]
    save: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Create a new Arma 3 server installation
    Create(commands::server::create::CreateArgs),
    /// Update an existing server installation and/or its mods
    Update(commands::server::update::UpdateArgs),
    /// Delete a server installation
    Delete(commands::server::delete::DeleteArgs),
    /// Manage a server's installed workshop mods
    Mods(commands::mods::ModsArgs),
    /// Manage a server's run instances
    Instance(commands::instance::InstanceArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<A3smError>()
            .map(A3smError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Both external collaborators must resolve on PATH before any
    // subcommand logic runs; their absence is a startup-time fatal.
    check_dependencies()?;

    let config_path = std::env::current_dir()?.join(GLOBAL_CONFIG_FILENAME);
    let config = GlobalConfig::load(&config_path)?;
    let mut ctx = AppContext {
        config,
        config_path,
        save_credentials: cli.save,
    };

    match cli.command {
        Commands::Create(args) => commands::server::create::handle_create(args, &mut ctx),
        Commands::Update(args) => commands::server::update::handle_update(args, &mut ctx),
        Commands::Delete(args) => commands::server::delete::handle_delete(args, &mut ctx),
        Commands::Mods(args) => commands::mods::handle_mods(args, &mut ctx),
        Commands::Instance(args) => commands::instance::handle_instance(args, &mut ctx),
    }
}

/// Verifies the required external executables are resolvable on PATH.
fn check_dependencies() -> Result<()> {
    for tool in [steam::STEAMCMD_BINARY, launch::TMUX_BINARY] {
        if which::which(tool).is_err() {
            return Err(A3smError::MissingDependency {
                tool: tool.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn a3sm_cmd() -> Command {
        Command::cargo_bin("a3sm").expect("Failed to find a3sm binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        a3sm_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        a3sm_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
