//! Git adapter for cloning checkouts.
//!
//! The bootstrapper only ever clones, so the wrapper is a thin shell around a
//! single `git clone` subprocess call.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, instrument};

use super::process::run_to_completion;
use crate::error::ProcessError;

/// Fetches a remote repository into a local directory.
pub trait Cloner {
    /// Clone `url` into `target`. `target` must not exist yet.
    fn clone_repo(&self, url: &str, target: &Path) -> Result<(), ProcessError>;
}

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run `git clone <url> <target>` with inherited stdio.
    #[instrument(skip_all, fields(url = %url, target = %target.display()))]
    pub fn clone_into(&self, url: &str, target: &Path) -> Result<(), ProcessError> {
        info!("cloning repository");
        let mut cmd = Command::new("git");
        cmd.arg("clone").arg(url).arg(target).current_dir(&self.workdir);
        run_to_completion(cmd, "git clone")
    }
}

impl Cloner for Git {
    fn clone_repo(&self, url: &str, target: &Path) -> Result<(), ProcessError> {
        self.clone_into(url, target)
    }
}
