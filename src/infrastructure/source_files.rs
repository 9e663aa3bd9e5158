//! Source file listing
//!
//! Walks the directory to be synced with gitignore semantics, the same rules
//! the external sync command applies. Used for dry-run plans.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{AppDeployError, AppDeployResult};

/// List files under `root` that a full sync would send, relative to `root`, sorted.
///
/// Honours `.gitignore` files even outside a git repository. The `.git`
/// directory itself is never included.
pub fn list_sync_files(root: &Path) -> AppDeployResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AppDeployError::Scan {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| AppDeployError::Scan {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.push(relative);
    }

    files.sort();
    Ok(files)
}
