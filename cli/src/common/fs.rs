//! # a3sm Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs.rs
//!
//! ## Overview
//!
//! Shared filesystem helpers: directory creation and the lowercase
//! normalization pass applied to downloaded workshop content.
//!
//! Workshop packages are authored on case-insensitive filesystems, so a
//! mod's manifest may reference `Addons/MyMod.pbo` while the downloaded
//! tree says `addons/mymod.pbo` (or any mixture). The dedicated server on
//! Linux resolves paths case-sensitively, which is why every entry under a
//! mod's content directory is renamed to its all-lowercase form after a
//! download.
//!
//! The pass is best effort per entry: a rename that fails (permissions,
//! collisions) is recorded and skipped, never fatal, and every remaining
//! entry is still attempted. Entries are processed depth-first from the
//! leaves upward so renaming a directory never invalidates paths of
//! descendants that are still queued.
//!
use crate::core::error::{A3smError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// One entry the normalization pass could not rename.
#[derive(Debug)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub error: std::io::Error,
}

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory (and any missing parents) when absent. A path
/// that exists but is not a directory is an error.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(A3smError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Renames every file and directory under `root` to its all-lowercase
/// name, leaves first.
///
/// Returns the list of entries that could not be renamed (best-effort
/// contract: failures are reported, not fatal). A `root` that does not
/// exist yields an empty report.
pub fn normalize_case(root: &Path) -> Result<Vec<RenameFailure>> {
    if !root.exists() {
        debug!("Nothing to normalize, {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut failures = Vec::new();
    // contents_first yields children before their parent directory, so a
    // directory is only renamed once everything inside it is done.
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let path = error.path().map(Path::to_path_buf).unwrap_or_default();
                let error = error
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                failures.push(RenameFailure { path, error });
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let lowered = name.to_lowercase();
        if lowered == name {
            continue;
        }
        let target = match entry.path().parent() {
            Some(parent) => parent.join(&lowered),
            None => continue,
        };
        if let Err(error) = fs::rename(entry.path(), &target) {
            failures.push(RenameFailure {
                path: entry.path().to_path_buf(),
                error,
            });
        } else {
            debug!("Renamed {} -> {}", entry.path().display(), target.display());
        }
    }
    Ok(failures)
}
