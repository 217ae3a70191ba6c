//! Read-only inspection for `bootstrap status`.
//!
//! Reports which plan paths exist without creating or cloning anything.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::plan::{Plan, Step};
use crate::io::fs::{PathState, has_git_metadata, path_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Present,
    Missing,
    /// A file sits where a directory is expected.
    NotADirectory,
    /// Checkout directory exists but has no `.git`.
    IncompleteCheckout,
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Present => "present",
            Self::Missing => "missing",
            Self::NotADirectory => "not a directory",
            Self::IncompleteCheckout => "present (no .git; clone may be incomplete)",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Path relative to the root, as shown to the user.
    pub subpath: PathBuf,
    pub status: PathStatus,
}

impl StatusEntry {
    pub fn render(&self) -> String {
        format!("{}: {}", self.subpath.display(), self.status)
    }
}

/// Inspect every step of `plan` under `root`.
pub fn inspect(root: &Path, plan: &Plan) -> Vec<StatusEntry> {
    plan.steps
        .iter()
        .map(|step| {
            let path = root.join(step.subpath());
            let status = match (step, path_state(&path)) {
                (_, PathState::Missing) => PathStatus::Missing,
                (_, PathState::NotADirectory) => PathStatus::NotADirectory,
                (Step::EnsureCheckout(_), PathState::Directory) if !has_git_metadata(&path) => {
                    PathStatus::IncompleteCheckout
                }
                (_, PathState::Directory) => PathStatus::Present,
            };
            StatusEntry {
                subpath: step.subpath().to_path_buf(),
                status,
            }
        })
        .collect()
}

/// True if nothing needs provisioning. Incomplete checkouts count as present,
/// matching what `bootstrap run` would do with them.
pub fn is_complete(entries: &[StatusEntry]) -> bool {
    entries.iter().all(|entry| {
        matches!(
            entry.status,
            PathStatus::Present | PathStatus::IncompleteCheckout
        )
    })
}
