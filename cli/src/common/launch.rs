//! # a3sm Server Process Launcher (`common::launch`)
//!
//! File: cli/src/common/launch.rs
//!
//! ## Overview
//!
//! Builds the dedicated server's argument vector for an instance and
//! launches it inside a detached tmux session. The tool does not supervise
//! the server: once tmux has accepted the session, the process belongs to
//! the multiplexer and a3sm exits. Only tmux's own exit code is observed.
//!
//! ## Invocation Contract
//!
//! ```text
//! tmux new-session -d -s a3sm-<server>-<instance> -c <serverDir> \
//!     ./arma3server -config=<profile>/server.cfg -port=<port> \
//!                   -profiles=<profile> -mod=<relpath;relpath;...>
//! ```
//!
//! Mod paths are relative to the installation directory (the server's
//! working directory) and are semicolon-joined, which is why a single mod
//! path must never contain a semicolon. The `-mod` flag is omitted
//! entirely when the instance enables no mods.
//!
use crate::core::config::InstanceRecord;
use crate::core::error::{A3smError, Result};
use anyhow::Context;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Name of the terminal multiplexer executable, resolved via PATH.
pub const TMUX_BINARY: &str = "tmux";

/// The dedicated server binary, relative to the installation directory.
pub const SERVER_BINARY: &str = "./arma3server";

/// tmux session name for a server/instance pair.
///
/// tmux rejects `.` and `:` in session names, and spaces make the name
/// awkward to address, so those are replaced with dashes.
pub fn session_name(server: &str, instance: &str) -> String {
    let sanitize = |s: &str| s.replace(['.', ':', ' '], "-");
    format!("a3sm-{}-{}", sanitize(server), sanitize(instance))
}

/// Builds the server's argument vector for one instance.
///
/// `mod_paths` are installation-relative paths in enable order; they are
/// semicolon-joined into a single `-mod=` flag.
pub fn server_args(instance: &InstanceRecord, mod_paths: &[String]) -> Vec<String> {
    let mut args = vec![
        format!("-config={}", instance.path.join("server.cfg").display()),
        format!("-port={}", instance.port),
        format!("-profiles={}", instance.path.display()),
    ];
    if !mod_paths.is_empty() {
        args.push(format!("-mod={}", mod_paths.join(";")));
    }
    args
}

/// Launches the server binary with `args` inside a detached tmux session,
/// working directory set to the installation directory.
pub fn start_in_tmux(server_dir: &Path, session: &str, args: &[String]) -> Result<()> {
    info!(
        "Starting {} in tmux session '{}' (cwd {})",
        SERVER_BINARY,
        session,
        server_dir.display()
    );
    debug!("Server arguments: {:?}", args);

    let status = Command::new(TMUX_BINARY)
        .arg("new-session")
        .arg("-d")
        .arg("-s")
        .arg(session)
        .arg("-c")
        .arg(server_dir)
        .arg(SERVER_BINARY)
        .args(args)
        .status()
        .with_context(|| format!("Failed to launch {TMUX_BINARY}"))?;

    if status.success() {
        return Ok(());
    }
    let code = status.code().unwrap_or(1);
    Err(A3smError::ExternalTool {
        tool: TMUX_BINARY.to_string(),
        code,
    }
    .into())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn instance(port: u16, mods: &[&str]) -> InstanceRecord {
        InstanceRecord {
            path: PathBuf::from("/srv/test/instances/main"),
            port,
            mods: mods.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_server_args_single_mod() {
        let inst = instance(2302, &["999"]);
        let mods = vec!["steamapps/workshop/content/107410/999".to_string()];
        let args = server_args(&inst, &mods);
        assert_eq!(
            args,
            vec![
                "-config=/srv/test/instances/main/server.cfg",
                "-port=2302",
                "-profiles=/srv/test/instances/main",
                "-mod=steamapps/workshop/content/107410/999",
            ]
        );
        // Exactly one path, so the joined list carries no semicolon.
        assert!(!args[3].contains(';'));
    }

    #[test]
    fn test_server_args_joins_mods_with_semicolons() {
        let inst = instance(2402, &["111", "222"]);
        let mods = vec![
            "steamapps/workshop/content/107410/111".to_string(),
            "steamapps/workshop/content/107410/222".to_string(),
        ];
        let args = server_args(&inst, &mods);
        assert_eq!(
            args[3],
            "-mod=steamapps/workshop/content/107410/111;steamapps/workshop/content/107410/222"
        );
    }

    #[test]
    fn test_server_args_omits_mod_flag_when_empty() {
        let inst = instance(2302, &[]);
        let args = server_args(&inst, &[]);
        assert_eq!(args.len(), 3);
        assert!(!args.iter().any(|a| a.starts_with("-mod=")));
    }

    #[test]
    fn test_session_name_sanitized() {
        assert_eq!(session_name("My Server", "main"), "a3sm-My-Server-main");
        assert_eq!(session_name("a.b:c", "x"), "a3sm-a-b-c-x");
    }
}
