//! Runs post-clone initialization hooks as direct child processes.

use std::process::Command;

use tracing::{info, instrument};

use super::process::run_to_completion;
use crate::core::hook::HookInvocation;
use crate::error::ProcessError;

pub trait HookRunner {
    fn run_hook(&self, invocation: &HookInvocation) -> Result<(), ProcessError>;
}

/// Spawns `<interpreter> <args..> <script>` without going through a shell string.
pub struct ProcessHookRunner;

impl HookRunner for ProcessHookRunner {
    #[instrument(skip_all, fields(script = %invocation.script.display()))]
    fn run_hook(&self, invocation: &HookInvocation) -> Result<(), ProcessError> {
        info!(interpreter = %invocation.interpreter, "running hook");
        let mut cmd = Command::new(&invocation.interpreter);
        cmd.args(&invocation.args)
            .arg(&invocation.script)
            .current_dir(&invocation.workdir);
        run_to_completion(cmd, &invocation.interpreter)
    }
}
