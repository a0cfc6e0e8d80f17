//! # a3sm Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers, separated from
//! command-specific logic (`commands::`) and core infrastructure
//! (`core::`).
//!
//! ## Architecture
//!
//! - **`steam`**: builds and runs steamcmd invocations for server
//!   install/update and workshop downloads; owns the Steam app IDs and the
//!   workshop content layout.
//! - **`launch`**: builds the dedicated server's argument vector and hands
//!   the process off to a detached tmux session.
//! - **`fs`**: directory helpers and the lowercase normalization pass over
//!   downloaded workshop content.
//! - **`ui`**: interactive prompts for inputs missing from the saved
//!   configuration.
//!
pub mod fs;
pub mod launch;
pub mod steam;
pub mod ui;
