//! Directory checks and creation under the bootstrap root.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ProvisionError, ProvisionResult};

/// What currently sits at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Missing,
    Directory,
    NotADirectory,
}

pub fn path_state(path: &Path) -> PathState {
    if path.is_dir() {
        PathState::Directory
    } else if path.exists() {
        PathState::NotADirectory
    } else {
        PathState::Missing
    }
}

/// Create `path` and any missing parents.
///
/// Returns `Ok(true)` if the directory was created and `Ok(false)` if it
/// already existed.
pub fn ensure_dir(path: &Path) -> ProvisionResult<bool> {
    match path_state(path) {
        PathState::Directory => {
            debug!(path = %path.display(), "directory exists");
            Ok(false)
        }
        PathState::NotADirectory => Err(ProvisionError::NotADirectory {
            path: path.to_path_buf(),
        }),
        PathState::Missing => {
            fs::create_dir_all(path).map_err(|source| ProvisionError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "directory created");
            Ok(true)
        }
    }
}

/// True if `checkout` holds git metadata (a `.git` directory or gitfile).
///
/// An interrupted clone can leave the directory behind without it.
pub fn has_git_metadata(checkout: &Path) -> bool {
    checkout.join(".git").exists()
}
