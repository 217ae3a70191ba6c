//! Post-clone hook resolution.
//!
//! A hook is a script inside a fresh checkout. Which script runs, and under
//! which interpreter, depends only on the host OS, so the choice is made here
//! and handed to the io layer as a fully resolved [`HookInvocation`].

use std::path::{Path, PathBuf};

/// Host operating system family, as far as hook selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Posix,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

/// Script names for each host family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookScripts {
    pub windows: String,
    pub posix: String,
}

impl HookScripts {
    pub fn new(windows: impl Into<String>, posix: impl Into<String>) -> Self {
        Self {
            windows: windows.into(),
            posix: posix.into(),
        }
    }

    pub fn script_for(&self, host: HostOs) -> &str {
        match host {
            HostOs::Windows => &self.windows,
            HostOs::Posix => &self.posix,
        }
    }

    /// Resolve the script inside `checkout` and the interpreter that runs it.
    pub fn invocation(&self, host: HostOs, checkout: &Path) -> HookInvocation {
        let script = checkout.join(self.script_for(host));
        let (interpreter, args) = match host {
            HostOs::Windows => ("cmd", vec!["/C".to_string()]),
            HostOs::Posix => ("sh", Vec::new()),
        };
        HookInvocation {
            interpreter: interpreter.to_string(),
            args,
            script,
            workdir: checkout.to_path_buf(),
        }
    }
}

/// A hook ready to spawn: `<interpreter> <args..> <script>` in `workdir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInvocation {
    pub interpreter: String,
    pub args: Vec<String>,
    pub script: PathBuf,
    pub workdir: PathBuf,
}

impl HookInvocation {
    /// File name of the script, e.g. `bootstrap-vcpkg.sh`.
    pub fn script_name(&self) -> Option<&str> {
        self.script.file_name().and_then(|name| name.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vcpkg_scripts() -> HookScripts {
        HookScripts::new("bootstrap-vcpkg.bat", "bootstrap-vcpkg.sh")
    }

    #[test]
    fn windows_runs_batch_script_through_cmd() {
        let checkout = Path::new("root").join("env").join("vcpkg");
        let inv = vcpkg_scripts().invocation(HostOs::Windows, &checkout);
        assert_eq!(inv.interpreter, "cmd");
        assert_eq!(inv.args, vec!["/C".to_string()]);
        assert_eq!(inv.script_name(), Some("bootstrap-vcpkg.bat"));
        assert_eq!(inv.script, checkout.join("bootstrap-vcpkg.bat"));
        assert_eq!(inv.workdir, checkout);
    }

    #[test]
    fn posix_runs_shell_script_through_sh() {
        let checkout = Path::new("root").join("env").join("vcpkg");
        let inv = vcpkg_scripts().invocation(HostOs::Posix, &checkout);
        assert_eq!(inv.interpreter, "sh");
        assert!(inv.args.is_empty());
        assert_eq!(inv.script_name(), Some("bootstrap-vcpkg.sh"));
    }

    #[test]
    fn current_matches_compile_target() {
        let expected = if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        };
        assert_eq!(HostOs::current(), expected);
    }
}
