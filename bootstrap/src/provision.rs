//! Orchestration for `bootstrap run`.
//!
//! Walks a [`Plan`] front to back. Directory steps create what is missing;
//! checkout steps clone what is missing and run the post-clone hook. The
//! first failure stops the run and nothing already created is rolled back.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::core::hook::HostOs;
use crate::core::plan::{CheckoutSpec, Plan, Step};
use crate::error::{ProvisionError, ProvisionResult};
use crate::io::fs::{PathState, ensure_dir, has_git_metadata, path_state};
use crate::io::git::Cloner;
use crate::io::hook::HookRunner;

/// Settings for a provisioning run that are not part of the plan.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Host family used to pick hook scripts.
    pub host: HostOs,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            host: HostOs::current(),
        }
    }
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Directory was missing and has been created.
    Created,
    /// Path was already there; nothing was touched.
    AlreadyPresent,
    /// Checkout was cloned. `initialized` is true if a hook ran afterwards.
    Cloned { initialized: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub path: PathBuf,
    pub outcome: StepOutcome,
}

/// Result of a successful run, one entry per plan step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub steps: Vec<StepReport>,
}

impl ProvisionReport {
    /// True if the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.steps
            .iter()
            .all(|step| step.outcome == StepOutcome::AlreadyPresent)
    }

    pub fn cloned(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().filter_map(|step| match step.outcome {
            StepOutcome::Cloned { .. } => Some(step.path.as_path()),
            _ => None,
        })
    }
}

/// Execute every step of `plan` against `root`, writing progress lines to `out`.
///
/// Ends with `All done!` on success. On failure the error is returned
/// unprinted; the caller owns the error line and the exit code.
#[instrument(skip_all, fields(root = %root.display(), steps = plan.steps.len()))]
pub fn run_provision<C: Cloner, H: HookRunner, W: Write>(
    root: &Path,
    plan: &Plan,
    cloner: &C,
    hooks: &H,
    config: &ProvisionConfig,
    out: &mut W,
) -> ProvisionResult<ProvisionReport> {
    let mut report = ProvisionReport::default();
    for step in &plan.steps {
        let path = root.join(step.subpath());
        let outcome = match step {
            Step::EnsureDir { subpath } => ensure_directory(&path, subpath, out)?,
            Step::EnsureCheckout(spec) => {
                ensure_checkout(&path, spec, cloner, hooks, config, out)?
            }
        };
        debug!(path = %path.display(), ?outcome, "step finished");
        report.steps.push(StepReport { path, outcome });
    }
    say(out, "All done!")?;
    info!(cloned = report.cloned().count(), "provisioning complete");
    Ok(report)
}

fn ensure_directory<W: Write>(
    path: &Path,
    label: &Path,
    out: &mut W,
) -> ProvisionResult<StepOutcome> {
    match path_state(path) {
        PathState::Directory => {
            say(out, &format!("'{}' directory already exists.", label.display()))?;
            Ok(StepOutcome::AlreadyPresent)
        }
        PathState::NotADirectory => Err(ProvisionError::NotADirectory {
            path: path.to_path_buf(),
        }),
        PathState::Missing => {
            say(out, &format!("Creating '{}' directory...", label.display()))?;
            ensure_dir(path)?;
            Ok(StepOutcome::Created)
        }
    }
}

fn ensure_checkout<C: Cloner, H: HookRunner, W: Write>(
    path: &Path,
    spec: &CheckoutSpec,
    cloner: &C,
    hooks: &H,
    config: &ProvisionConfig,
    out: &mut W,
) -> ProvisionResult<StepOutcome> {
    if path.exists() {
        if !has_git_metadata(path) {
            warn!(
                path = %path.display(),
                "checkout exists without .git; a previous clone may have been interrupted"
            );
        }
        say(out, &format!("{} already exists.", spec.name))?;
        return Ok(StepOutcome::AlreadyPresent);
    }

    say(out, &format!("Cloning {} from {}...", spec.name, spec.origin))?;
    cloner
        .clone_repo(&spec.remote_url, path)
        .map_err(|source| ProvisionError::Clone {
            name: spec.name.clone(),
            source,
        })?;

    let Some(scripts) = &spec.hook else {
        return Ok(StepOutcome::Cloned { initialized: false });
    };
    say(out, &format!("Initializing {}...", spec.name))?;
    let invocation = scripts.invocation(config.host, path);
    debug!(script = %invocation.script.display(), "selected hook");
    hooks
        .run_hook(&invocation)
        .map_err(|source| ProvisionError::Hook {
            name: spec.name.clone(),
            source,
        })?;
    Ok(StepOutcome::Cloned { initialized: true })
}

fn say<W: Write>(out: &mut W, line: &str) -> ProvisionResult<()> {
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|source| ProvisionError::Console { source })
}
