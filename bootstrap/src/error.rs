//! Error types for provisioning steps and the processes they spawn.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of an external process (`git`, a bootstrap script).
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` {}", describe_exit(.code))]
    Exit { program: String, code: Option<i32> },
}

impl ProcessError {
    /// Exit code reported by the child, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { code, .. } => *code,
            Self::Spawn { .. } => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// A provisioning step that could not complete. Every variant is fatal to the run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Error creating '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating '{}': path exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Error cloning {name}: {source}")]
    Clone {
        name: String,
        #[source]
        source: ProcessError,
    },

    #[error("Error initializing {name}: {source}")]
    Hook {
        name: String,
        #[source]
        source: ProcessError,
    },

    #[error("Error writing progress output: {source}")]
    Console {
        #[source]
        source: io::Error,
    },
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;
