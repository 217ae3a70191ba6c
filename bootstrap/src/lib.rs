//! Idempotent bootstrapper for the ciftl development environment.
//!
//! Ensures the vcpkg toolchain checkout and the ciftl-cpp dependency checkout
//! exist under a project root before a build runs. The crate keeps the same
//! split as any command runner:
//!
//! - **[`core`]**: Pure descriptions of what to provision (plans, checkout
//!   specs, hook selection). No I/O.
//! - **[`io`]**: Side-effecting operations (directory creation, `git clone`,
//!   hook processes). Isolated behind traits so tests can record calls.
//!
//! [`provision`] and [`status`] combine the two to implement the CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod provision;
pub mod status;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
