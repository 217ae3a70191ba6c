//! Provisioning plans: the ordered steps for each bootstrap variant.

use std::path::{Path, PathBuf};

use super::hook::HookScripts;

pub const ENV_DIR: &str = "env";
pub const DEPS_DIR: &str = "deps";

pub const VCPKG_NAME: &str = "vcpkg";
pub const VCPKG_URL: &str = "https://github.com/microsoft/vcpkg.git";
pub const VCPKG_HOOK_WINDOWS: &str = "bootstrap-vcpkg.bat";
pub const VCPKG_HOOK_POSIX: &str = "bootstrap-vcpkg.sh";

pub const CIFTL_CPP_NAME: &str = "ciftl-cpp";
pub const CIFTL_CPP_URL: &str = "https://github.com/sandinpool/ciftl-cpp.git";

const GITHUB: &str = "GitHub";

/// Which set of prerequisites to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// vcpkg plus the ciftl-cpp dependency checkout.
    #[default]
    Full,
    /// vcpkg only.
    ToolchainOnly,
}

/// A source-control checkout to ensure under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSpec {
    /// Human-readable name used in progress lines (`vcpkg`).
    pub name: String,
    /// Where the remote lives, for progress lines (`GitHub`).
    pub origin: String,
    pub remote_url: String,
    /// Checkout directory, relative to the root.
    pub subpath: PathBuf,
    /// Script to run once after a fresh clone.
    pub hook: Option<HookScripts>,
}

impl CheckoutSpec {
    pub fn vcpkg() -> Self {
        Self {
            name: VCPKG_NAME.to_string(),
            origin: GITHUB.to_string(),
            remote_url: VCPKG_URL.to_string(),
            subpath: PathBuf::from(ENV_DIR).join(VCPKG_NAME),
            hook: Some(HookScripts::new(VCPKG_HOOK_WINDOWS, VCPKG_HOOK_POSIX)),
        }
    }

    pub fn ciftl_cpp() -> Self {
        Self {
            name: CIFTL_CPP_NAME.to_string(),
            origin: GITHUB.to_string(),
            remote_url: CIFTL_CPP_URL.to_string(),
            subpath: PathBuf::from(DEPS_DIR).join(CIFTL_CPP_NAME),
            hook: None,
        }
    }
}

/// One idempotent check-then-act step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a directory (and missing parents) if absent.
    EnsureDir { subpath: PathBuf },
    /// Clone a repository if its checkout directory is absent.
    EnsureCheckout(CheckoutSpec),
}

impl Step {
    pub fn ensure_dir(subpath: impl Into<PathBuf>) -> Self {
        Self::EnsureDir {
            subpath: subpath.into(),
        }
    }

    /// Path this step guarantees, relative to the root.
    pub fn subpath(&self) -> &Path {
        match self {
            Self::EnsureDir { subpath } => subpath.as_path(),
            Self::EnsureCheckout(spec) => spec.subpath.as_path(),
        }
    }
}

/// Ordered steps, executed front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn for_variant(variant: Variant) -> Self {
        let mut steps = vec![
            Step::ensure_dir(ENV_DIR),
            Step::EnsureCheckout(CheckoutSpec::vcpkg()),
        ];
        if variant == Variant::Full {
            steps.push(Step::ensure_dir(DEPS_DIR));
            steps.push(Step::EnsureCheckout(CheckoutSpec::ciftl_cpp()));
        }
        Self { steps }
    }
}
