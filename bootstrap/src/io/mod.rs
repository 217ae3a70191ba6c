//! I/O helpers for bootstrap commands.

pub mod fs;
pub mod git;
pub mod hook;
pub mod process;
