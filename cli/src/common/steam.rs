//! # a3sm SteamCMD Invoker (`common::steam`)
//!
//! File: cli/src/common/steam.rs
//!
//! ## Overview
//!
//! This module wraps the external `steamcmd` CLI for the two fetch
//! operations a3sm performs: installing/updating the dedicated server
//! application, and downloading workshop items into an installation's
//! content cache.
//!
//! ## Architecture
//!
//! Argument vectors are built by pure functions so the exact command lines
//! can be unit tested; a single private runner spawns the process. The
//! invocation contract is positional and must not be reordered, since
//! steamcmd parses its `+command` arguments in sequence:
//!
//! ```text
//! steamcmd +login USER PASS +force_install_dir DIR +app_update 233780 validate +quit
//! steamcmd +login USER PASS +force_install_dir DIR +workshop_download_item 107410 ID... +quit
//! ```
//!
//! Calls are synchronous and block until steamcmd exits; stdio is
//! inherited because the login step may prompt for a Steam Guard code.
//! There is no timeout and no retry. The exit code is the only success
//! signal: non-zero becomes [`A3smError::ExternalTool`] carrying the code,
//! which `main` forwards as this process's exit code.
//!
use crate::common::ui::prompts;
use crate::core::config::SteamAuth;
use crate::core::error::{A3smError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Name of the steamcmd executable, resolved via PATH.
pub const STEAMCMD_BINARY: &str = "steamcmd";

/// Steam application ID of the Arma 3 dedicated server.
pub const SERVER_APP_ID: &str = "233780";

/// Steam application ID of the Arma 3 game; workshop items are published
/// against the game, not the dedicated server.
pub const GAME_APP_ID: &str = "107410";

/// A complete username/password pair, ready to hand to steamcmd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Produces a full credential pair from whatever the configuration holds,
/// prompting interactively for each missing half.
pub fn resolve_credentials(auth: &SteamAuth) -> Result<Credentials> {
    let user = match &auth.user {
        Some(user) => user.clone(),
        None => prompts::prompt_line("What is your steam username?")?,
    };
    let password = match &auth.password {
        Some(password) => password.clone(),
        None => prompts::prompt_line("What is your steam password?")?,
    };
    Ok(Credentials { user, password })
}

/// Relative path (from the installation directory) of a downloaded mod's
/// content, as steamcmd lays it out.
pub fn mod_relative_path(mod_id: &str) -> String {
    format!("steamapps/workshop/content/{GAME_APP_ID}/{mod_id}")
}

/// Absolute path of a mod's content directory inside an installation.
pub fn mod_content_dir(install_dir: &Path, mod_id: &str) -> PathBuf {
    install_dir.join(mod_relative_path(mod_id))
}

/// Builds the argument vector for installing or updating the server
/// application into `install_dir`.
pub fn server_update_args(creds: &Credentials, install_dir: &Path) -> Vec<String> {
    vec![
        "+login".into(),
        creds.user.clone(),
        creds.password.clone(),
        "+force_install_dir".into(),
        install_dir.to_string_lossy().into_owned(),
        "+app_update".into(),
        SERVER_APP_ID.into(),
        "validate".into(),
        "+quit".into(),
    ]
}

/// Builds the argument vector for downloading `mod_ids` (in input order)
/// into `install_dir`'s workshop cache.
pub fn mod_download_args(creds: &Credentials, mod_ids: &[String], install_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "+login".into(),
        creds.user.clone(),
        creds.password.clone(),
        "+force_install_dir".into(),
        install_dir.to_string_lossy().into_owned(),
    ];
    for mod_id in mod_ids {
        args.push("+workshop_download_item".into());
        args.push(GAME_APP_ID.into());
        args.push(mod_id.clone());
    }
    args.push("+quit".into());
    args
}

/// Installs or updates the server application. Blocks until steamcmd
/// exits; forwards a non-zero exit code as [`A3smError::ExternalTool`].
pub fn update_server(creds: &Credentials, install_dir: &Path) -> Result<()> {
    info!("Updating server application in {}", install_dir.display());
    run_steamcmd(server_update_args(creds, install_dir))
}

/// Downloads the given workshop items, one download step per ID in input
/// order, within a single steamcmd invocation.
pub fn download_mods(creds: &Credentials, mod_ids: &[String], install_dir: &Path) -> Result<()> {
    info!(
        "Downloading {} workshop item(s) into {}",
        mod_ids.len(),
        install_dir.display()
    );
    run_steamcmd(mod_download_args(creds, mod_ids, install_dir))
}

fn run_steamcmd(args: Vec<String>) -> Result<()> {
    debug!("Invoking {} with {} arguments", STEAMCMD_BINARY, args.len());
    println!("####################");
    println!("Starting SteamCMD...");
    println!("####################");

    // Inherited stdio: steamcmd prints its own progress and may prompt
    // for a Steam Guard code on first login.
    let status = Command::new(STEAMCMD_BINARY)
        .args(&args)
        .status()
        .with_context(|| format!("Failed to launch {STEAMCMD_BINARY}"))?;

    println!("####################");
    println!("SteamCMD closed");
    println!("####################");

    if status.success() {
        return Ok(());
    }
    // A signal-terminated child has no code; report it as 1.
    let code = status.code().unwrap_or(1);
    Err(A3smError::ExternalTool {
        tool: STEAMCMD_BINARY.to_string(),
        code,
    }
    .into())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            user: "alice".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn test_server_update_argument_order() {
        let args = server_update_args(&creds(), Path::new("/srv/test"));
        assert_eq!(
            args,
            vec![
                "+login",
                "alice",
                "hunter2",
                "+force_install_dir",
                "/srv/test",
                "+app_update",
                "233780",
                "validate",
                "+quit",
            ]
        );
    }

    #[test]
    fn test_mod_download_one_step_per_mod_in_input_order() {
        let mods = vec!["999".to_string(), "123".to_string()];
        let args = mod_download_args(&creds(), &mods, Path::new("/srv/test"));
        assert_eq!(
            args,
            vec![
                "+login",
                "alice",
                "hunter2",
                "+force_install_dir",
                "/srv/test",
                "+workshop_download_item",
                "107410",
                "999",
                "+workshop_download_item",
                "107410",
                "123",
                "+quit",
            ]
        );
    }

    #[test]
    fn test_mod_content_dir_layout() {
        let dir = mod_content_dir(Path::new("/srv/test"), "999");
        assert_eq!(
            dir,
            PathBuf::from("/srv/test/steamapps/workshop/content/107410/999")
        );
    }
}
