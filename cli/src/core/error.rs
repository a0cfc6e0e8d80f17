//! # a3sm Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout a3sm. Every
//! failure a command can hit maps onto one of a small set of variants, so
//! the entry point in `main.rs` can translate errors into process exit
//! codes uniformly.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `A3smError`: a custom error enum derived with `thiserror` for the
//!   specific failure classes of this tool
//! - `Result<T>`: a type alias for `anyhow::Result<T>` so call sites can
//!   attach context freely while still carrying typed errors inside
//!
//! The variants cover the failure classes of the tool:
//! - Missing external executables (steamcmd, tmux) detected at startup
//! - Registry lookups that come up empty (server or instance name)
//! - Mod references that cannot be resolved to a workshop ID
//! - External tool invocations that exited non-zero (the exit code is
//!   carried so `main` can forward it verbatim)
//! - Configuration and filesystem problems
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if record.is_none() {
//!     return Err(A3smError::ServerNotFound { name: name.into() }.into());
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the a3sm application.
#[derive(Error, Debug)]
pub enum A3smError {
    /// A required external executable could not be resolved on PATH.
    /// Checked before any subcommand logic runs.
    #[error("{tool} is not available on this system or is not available in the path.")]
    MissingDependency { tool: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// No installation in the registry carries the requested display name.
    #[error("Server '{name}' not found.")]
    ServerNotFound { name: String },

    /// The named server exists but has no instance section by that name.
    #[error("Instance '{name}' not found on server '{server}'.")]
    InstanceNotFound { server: String, name: String },

    /// A mod token is neither a known ID nor a workshop URL carrying an
    /// `id` query parameter (or, where membership is required, the
    /// resolved ID is not in the installed set).
    #[error("Cannot resolve mod reference '{token}'.")]
    UnresolvableReference { token: String },

    /// An external tool (steamcmd, tmux, the server binary) exited with a
    /// non-zero status. The code is forwarded as this process's exit code.
    #[error("{tool} exited with status {code}")]
    ExternalTool { tool: String, code: i32 },
}

impl A3smError {
    /// Exit code this error should terminate the process with.
    ///
    /// External tool failures forward the collaborator's exit code
    /// verbatim; everything else exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            A3smError::ExternalTool { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
