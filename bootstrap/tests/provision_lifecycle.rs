//! Library-level tests for repeated provisioning runs.
//!
//! These drive `run_provision` with recording fakes and compare the
//! filesystem between runs.

use std::fs;
use std::path::{Path, PathBuf};

use ciftl_bootstrap::core::hook::HostOs;
use ciftl_bootstrap::core::plan::{Plan, Variant};
use ciftl_bootstrap::provision::{ProvisionConfig, StepOutcome, run_provision};
use ciftl_bootstrap::test_support::{RecordingCloner, RecordingHookRunner, TestRoot};

/// Sorted list of every path under `root`, relative to it.
fn snapshot(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, acc: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            acc.push(path.strip_prefix(root).expect("under root").to_path_buf());
            if path.is_dir() {
                walk(root, &path, acc);
            }
        }
    }
    let mut acc = Vec::new();
    walk(root, root, &mut acc);
    acc.sort();
    acc
}

fn config() -> ProvisionConfig {
    ProvisionConfig {
        host: HostOs::Posix,
    }
}

#[test]
fn repeated_runs_leave_identical_state() {
    let root = TestRoot::new().expect("root");
    let plan = Plan::for_variant(Variant::Full);
    let cloner = RecordingCloner::succeeding();
    let hooks = RecordingHookRunner::succeeding();

    let first = run_provision(root.path(), &plan, &cloner, &hooks, &config(), &mut Vec::new())
        .expect("first run");
    let after_first = snapshot(root.path());
    let second = run_provision(root.path(), &plan, &cloner, &hooks, &config(), &mut Vec::new())
        .expect("second run");
    let after_second = snapshot(root.path());

    assert_eq!(after_first, after_second);
    assert!(!first.is_noop());
    assert!(second.is_noop());
    assert_eq!(first.cloned().count(), 2);
    assert_eq!(cloner.calls().len(), 2);
    assert_eq!(hooks.calls().len(), 1);
}

/// A failed clone leaves `env/` behind; the next run picks up from there.
#[test]
fn rerun_after_clone_failure_resumes() {
    let root = TestRoot::new().expect("root");
    let plan = Plan::for_variant(Variant::Full);

    let failing = RecordingCloner::failing_with(128);
    let hooks = RecordingHookRunner::succeeding();
    run_provision(root.path(), &plan, &failing, &hooks, &config(), &mut Vec::new())
        .expect_err("clone fails");
    assert!(root.path().join("env").is_dir());

    let cloner = RecordingCloner::succeeding();
    let report = run_provision(root.path(), &plan, &cloner, &hooks, &config(), &mut Vec::new())
        .expect("second run");

    assert_eq!(report.steps[0].outcome, StepOutcome::AlreadyPresent);
    assert_eq!(report.steps[1].outcome, StepOutcome::Cloned { initialized: true });
    assert_eq!(cloner.calls().len(), 2);
}

#[test]
fn hook_runs_inside_fresh_checkout() {
    let root = TestRoot::new().expect("root");
    let hooks = RecordingHookRunner::succeeding();

    run_provision(
        root.path(),
        &Plan::for_variant(Variant::ToolchainOnly),
        &RecordingCloner::succeeding(),
        &hooks,
        &config(),
        &mut Vec::new(),
    )
    .expect("run");

    let calls = hooks.calls();
    let checkout = root.path().join("env").join("vcpkg");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].script, checkout.join("bootstrap-vcpkg.sh"));
    assert_eq!(calls[0].workdir, checkout);
    assert_eq!(calls[0].interpreter, "sh");
}

#[test]
fn pre_existing_dependency_checkout_is_kept() {
    let root = TestRoot::new().expect("root");
    let checkout = root.mkdir("deps/ciftl-cpp").expect("mkdir");
    fs::write(checkout.join("local-change.txt"), "keep me").expect("write");
    let cloner = RecordingCloner::succeeding();

    run_provision(
        root.path(),
        &Plan::for_variant(Variant::Full),
        &cloner,
        &RecordingHookRunner::succeeding(),
        &config(),
        &mut Vec::new(),
    )
    .expect("run");

    let calls = cloner.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].url.ends_with("vcpkg.git"));
    assert_eq!(
        fs::read_to_string(checkout.join("local-change.txt")).expect("read"),
        "keep me"
    );
}
