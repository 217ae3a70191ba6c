//! Pure provisioning logic: what to create and how hooks are resolved.
//!
//! Nothing in here touches the filesystem or spawns processes.

pub mod hook;
pub mod plan;
