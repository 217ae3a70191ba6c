//! Test-only fakes for the clone and hook seams.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::hook::HookInvocation;
use crate::error::ProcessError;
use crate::io::git::Cloner;
use crate::io::hook::HookRunner;

/// One recorded `clone_repo` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneCall {
    pub url: String,
    pub target: PathBuf,
}

/// Cloner that records calls instead of touching the network.
///
/// On success it creates the target directory, like a real clone would.
pub struct RecordingCloner {
    exit_code: Option<i32>,
    calls: RefCell<Vec<CloneCall>>,
}

impl RecordingCloner {
    pub fn succeeding() -> Self {
        Self {
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every clone fails with `code` and leaves nothing behind.
    pub fn failing_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CloneCall> {
        self.calls.borrow().clone()
    }
}

impl Cloner for RecordingCloner {
    fn clone_repo(&self, url: &str, target: &Path) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(CloneCall {
            url: url.to_string(),
            target: target.to_path_buf(),
        });
        if let Some(code) = self.exit_code {
            return Err(ProcessError::Exit {
                program: "git clone".to_string(),
                code: Some(code),
            });
        }
        fs::create_dir_all(target).map_err(|source| ProcessError::Spawn {
            program: "git clone".to_string(),
            source,
        })
    }
}

/// Hook runner that records invocations and returns a scripted result.
pub struct RecordingHookRunner {
    exit_code: Option<i32>,
    calls: RefCell<Vec<HookInvocation>>,
}

impl RecordingHookRunner {
    pub fn succeeding() -> Self {
        Self {
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<HookInvocation> {
        self.calls.borrow().clone()
    }
}

impl HookRunner for RecordingHookRunner {
    fn run_hook(&self, invocation: &HookInvocation) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(invocation.clone());
        match self.exit_code {
            Some(code) => Err(ProcessError::Exit {
                program: invocation.interpreter.clone(),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}

/// Temporary project root, removed on drop.
pub struct TestRoot {
    dir: tempfile::TempDir,
}

impl TestRoot {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Pre-create a directory below the root (e.g. an existing checkout).
    pub fn mkdir(&self, subpath: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(subpath);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}
