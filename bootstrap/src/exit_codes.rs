//! Stable exit codes for bootstrap CLI commands.

/// Every step succeeded, or `bootstrap status` found the layout complete.
pub const OK: i32 = 0;
/// A directory, clone or initialization step failed.
pub const FAILURE: i32 = 1;
/// `bootstrap status` found at least one missing path.
pub const INCOMPLETE: i32 = 2;
