//! # a3sm Server/Instance Registry
//!
//! File: cli/src/core/registry.rs
//!
//! ## Overview
//!
//! Lookup layer between human-readable names and on-disk records. The
//! global configuration only stores installation directories; this module
//! scans that list, loads each directory's `server.ini`, and matches the
//! recorded display name against the one the user asked for.
//!
//! ## Behavior
//!
//! - Directories are scanned in registration order and the first name
//!   match wins. Duplicate names are not expected (create refuses them);
//!   if they occur anyway, later entries are simply never reached.
//! - A candidate directory whose record file does not exist is treated as
//!   a broken installation: the scan stops and reports not-found rather
//!   than erroring out or skipping past it. A record file that exists but
//!   fails to parse is still a hard error.
//! - Instance lookup is a direct map access on an already-loaded record.
//!
use crate::core::config::ServerRecord;
use crate::core::error::{A3smError, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Scans `dirs` in order for an installation whose record carries `name`.
///
/// Returns the loaded record together with its installation directory, or
/// `None` when no candidate matches. The moment a candidate directory has
/// no record file, the scan stops with `None` (missing file means a
/// broken or half-removed installation, not a fatal error).
pub fn find_server(name: &str, dirs: &[PathBuf]) -> Result<Option<(PathBuf, ServerRecord)>> {
    for dir in dirs {
        let record_file = ServerRecord::file_path(dir);
        if !record_file.exists() {
            warn!(
                "Registered installation {} has no record file, stopping scan",
                dir.display()
            );
            return Ok(None);
        }
        let record = ServerRecord::load(&record_file)?;
        if record.name == name {
            debug!("Resolved server '{}' to {}", name, dir.display());
            return Ok(Some((dir.clone(), record)));
        }
    }
    Ok(None)
}

/// Like [`find_server`] but turns the not-found case into the
/// [`A3smError::ServerNotFound`] error most commands want.
pub fn require_server(name: &str, dirs: &[PathBuf]) -> Result<(PathBuf, ServerRecord)> {
    find_server(name, dirs)?.ok_or_else(|| {
        A3smError::ServerNotFound {
            name: name.to_string(),
        }
        .into()
    })
}

/// Looks up an instance section on a loaded record, failing with
/// [`A3smError::InstanceNotFound`] when absent.
pub fn require_instance<'a>(
    record: &'a ServerRecord,
    instance: &str,
) -> Result<&'a crate::core::config::InstanceRecord> {
    record.instances.get(instance).ok_or_else(|| {
        A3smError::InstanceNotFound {
            server: record.name.clone(),
            name: instance.to_string(),
        }
        .into()
    })
}
