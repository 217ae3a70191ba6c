//! Helper for running child processes to completion.
//!
//! Children inherit stdio so `git clone` progress and bootstrap script output
//! reach the terminal as they happen. No timeout is applied: a hung
//! child blocks the run until it is interrupted.

use std::process::Command;

use tracing::{debug, instrument};

use crate::error::ProcessError;

/// Spawn `cmd`, wait for it, and map a non-zero exit to [`ProcessError::Exit`].
///
/// `program` is only used to label errors and trace events.
#[instrument(skip(cmd))]
pub fn run_to_completion(mut cmd: Command, program: &str) -> Result<(), ProcessError> {
    debug!("spawning child process");
    let status = match cmd.status() {
        Ok(status) => status,
        Err(source) => {
            debug!(err = %source, "failed to spawn command");
            return Err(ProcessError::Spawn {
                program: program.to_string(),
                source,
            });
        }
    };

    debug!(exit_code = ?status.code(), "command finished");
    if status.success() {
        Ok(())
    } else {
        Err(ProcessError::Exit {
            program: program.to_string(),
            code: status.code(),
        })
    }
}
