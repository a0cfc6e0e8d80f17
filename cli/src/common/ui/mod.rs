//! # a3sm Terminal UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers shared by the command handlers. Currently
//! this is just the `prompts` submodule, which covers the two places the
//! tool blocks on the user: missing Steam credentials and the
//! installation-directory question during `create`.
//!
pub mod prompts;
