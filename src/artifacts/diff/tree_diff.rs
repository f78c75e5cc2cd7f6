use crate::areas::workspace::Workspace;
use anyhow::Context;
use derive_new::new;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate every regular file under `root`, optionally with its directories
///
/// Paths are returned relative to `root`, in file-name order. The repository
/// metadata directory is never descended into.
pub fn list_files(root: &Path, include_directories: bool) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("The specified path is not a directory: {:?}", root);
    }

    let mut files = Vec::new();
    let entries = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !Workspace::is_ignored(Path::new(entry.file_name())));

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to walk directory: {:?}", root))?;
        let file_type = entry.file_type();

        if file_type.is_file() || (include_directories && file_type.is_dir()) {
            files.push(entry.path().strip_prefix(root)?.to_path_buf());
        }
    }

    Ok(files)
}

/// Comparison of a source tree against a target tree
///
/// Results are always expressed as paths of the source tree, so swapping the
/// arguments turns additions into removals.
#[derive(Debug, Clone, Copy, new)]
pub struct TreeDiff<'p> {
    source: &'p Path,
    target: &'p Path,
}

impl<'p> TreeDiff<'p> {
    /// Files present in both trees whose bytes differ
    pub fn changed(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut changed = Vec::new();

        for file in list_files(self.source, false)? {
            let target_file = self.target.join(&file);

            if target_file.is_file() && !same_content(&self.source.join(&file), &target_file)? {
                changed.push(file);
            }
        }

        Ok(changed)
    }

    /// Paths of the source tree with no counterpart in the target tree
    pub fn only_in_source(&self, include_directories: bool) -> anyhow::Result<Vec<PathBuf>> {
        let files = list_files(self.source, include_directories)?;

        if !self.target.is_dir() {
            return Ok(files);
        }

        Ok(files
            .into_iter()
            .filter(|file| {
                let target_path = self.target.join(file);
                match self.source.join(file).is_dir() {
                    true => !target_path.is_dir(),
                    false => !target_path.is_file(),
                }
            })
            .collect())
    }

    /// Files that are new or modified in the source relative to the target
    pub fn changed_or_added(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = self.changed()?;
        files.extend(self.only_in_source(false)?);
        files.sort();

        Ok(files)
    }
}

/// Byte-for-byte comparison of two files
pub fn same_content(left: &Path, right: &Path) -> anyhow::Result<bool> {
    let left_len = std::fs::metadata(left)
        .with_context(|| format!("Failed to get metadata for file: {:?}", left))?
        .len();
    let right_len = std::fs::metadata(right)
        .with_context(|| format!("Failed to get metadata for file: {:?}", right))?
        .len();

    if left_len != right_len {
        return Ok(false);
    }

    Ok(read_bytes(left)? == read_bytes(right)?)
}

fn read_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::new();
    std::fs::File::open(path)
        .and_then(|mut file| file.read_to_end(&mut data))
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    Ok(data)
}
