//! Core utilities shared by the stores
//!
//! Raw copy and removal primitives. Every area (working tree, staging area,
//! snapshots) is a plain directory tree, so moving content between them comes
//! down to these few operations.

use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

/// Copy a single file, creating missing parent directories first
///
/// An existing file at the destination is overwritten. A directory at the
/// destination is only replaced when no file lives anywhere below it.
pub fn copy_file(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if destination.is_dir() {
        if has_files(destination)? {
            anyhow::bail!(
                "Refusing to replace non-empty directory {:?} with a file",
                destination
            );
        }
        std::fs::remove_dir_all(destination)
            .with_context(|| format!("Failed to remove empty directory: {:?}", destination))?;
    }

    write_copy(source, destination)
}

/// Copy a single file, discarding whatever occupies the destination or its parents
///
/// Only for areas wholly owned by the repository, such as the staging area.
pub fn replace_file(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if let Some(blocking) = destination
        .ancestors()
        .skip(1)
        .find(|ancestor| ancestor.is_file())
    {
        std::fs::remove_file(blocking)
            .with_context(|| format!("Failed to remove file in the way: {:?}", blocking))?;
    }

    if destination.is_dir() {
        std::fs::remove_dir_all(destination)
            .with_context(|| format!("Failed to remove existing directory: {:?}", destination))?;
    }

    write_copy(source, destination)
}

fn write_copy(source: &Path, destination: &Path) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    std::fs::copy(source, destination)
        .with_context(|| format!("Failed to copy {:?} to {:?}", source, destination))?;

    Ok(())
}

/// Remove `root/relative` and prune the parent directories it leaves empty
///
/// Pruning stops at `root`, which is never removed.
pub fn remove_file(root: &Path, relative: &Path) -> anyhow::Result<()> {
    let path = root.join(relative);

    if path.is_file() {
        std::fs::remove_file(&path).with_context(|| format!("Failed to remove file: {:?}", path))?;
    }

    // parents may already be gone from the working tree
    let mut current = path.parent();
    while let Some(dir) = current
        && dir != root
        && dir.starts_with(root)
    {
        if dir.is_dir() {
            let is_empty = dir
                .read_dir()
                .with_context(|| format!("Failed to read directory: {:?}", dir))?
                .next()
                .is_none();
            if !is_empty {
                break;
            }

            std::fs::remove_dir(dir)
                .with_context(|| format!("Failed to remove empty directory: {:?}", dir))?;
        }
        current = dir.parent();
    }

    Ok(())
}

/// Whether any regular file lives below `dir`
pub fn has_files(dir: &Path) -> anyhow::Result<bool> {
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk directory: {:?}", dir))?;
        if entry.file_type().is_file() {
            return Ok(true);
        }
    }

    Ok(false)
}
