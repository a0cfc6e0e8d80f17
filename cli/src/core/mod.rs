//! # a3sm Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components of a3sm:
//! configuration persistence, the name registry, mod reference resolution,
//! and the error taxonomy.
//!
//! ## Architecture
//!
//! - `config`: the INI-backed configuration store (global `a3sm.ini` and
//!   per-installation `server.ini` records)
//! - `registry`: name-to-installation lookup over the configured server
//!   list, plus instance lookup on a loaded record
//! - `modref`: normalization of user-supplied mod tokens (raw IDs or
//!   workshop URLs) into canonical IDs
//! - `error`: error types and the crate-wide `Result` alias
//!
//! Command handlers import these as `crate::core::{config, registry, ...}`.
//!
pub mod config;
pub mod error;
pub mod modref;
pub mod registry;
