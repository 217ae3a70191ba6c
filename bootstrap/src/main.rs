//! ciftl development-environment bootstrapper.
//!
//! Ensures `env/vcpkg` (cloned and bootstrapped) and `deps/ciftl-cpp` exist
//! under the project root. Safe to run repeatedly: anything already present
//! is left alone.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ciftl_bootstrap::core::plan::{Plan, Variant};
use ciftl_bootstrap::exit_codes;
use ciftl_bootstrap::io::git::Git;
use ciftl_bootstrap::io::hook::ProcessHookRunner;
use ciftl_bootstrap::logging;
use ciftl_bootstrap::provision::{ProvisionConfig, run_provision};
use ciftl_bootstrap::status::{inspect, is_complete};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bootstrap",
    version,
    about = "Provision the vcpkg toolchain and ciftl-cpp checkouts",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Options for the implicit `run` when no subcommand is given.
    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Create missing directories and clone missing checkouts (default).
    Run(TargetArgs),
    /// Report which paths exist without changing anything.
    Status(TargetArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct TargetArgs {
    /// Project root to provision under (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Only provision the vcpkg toolchain, skipping `deps/`.
    #[arg(long)]
    toolchain_only: bool,
}

impl TargetArgs {
    /// Absolute project root. A relative `--root` is resolved against the
    /// current directory.
    fn resolve_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => std::path::absolute(root)
                .with_context(|| format!("resolve root {}", root.display())),
            None => std::env::current_dir().context("resolve current directory"),
        }
    }

    fn variant(&self) -> Variant {
        if self.toolchain_only {
            Variant::ToolchainOnly
        } else {
            Variant::Full
        }
    }
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init();
    match cli.command.unwrap_or(Command::Run(cli.target)) {
        Command::Run(args) => cmd_run(&args),
        Command::Status(args) => cmd_status(&args),
    }
}

fn cmd_run(args: &TargetArgs) -> Result<i32> {
    let root = args.resolve_root()?;
    let plan = Plan::for_variant(args.variant());
    debug!(root = %root.display(), variant = ?args.variant(), "provisioning");

    let git = Git::new(&root);
    let mut out = io::stdout().lock();
    match run_provision(
        &root,
        &plan,
        &git,
        &ProcessHookRunner,
        &ProvisionConfig::default(),
        &mut out,
    ) {
        Ok(_) => Ok(exit_codes::OK),
        Err(err) => {
            eprintln!("{err}");
            Ok(exit_codes::FAILURE)
        }
    }
}

fn cmd_status(args: &TargetArgs) -> Result<i32> {
    let root = args.resolve_root()?;
    let entries = inspect(&root, &Plan::for_variant(args.variant()));
    for entry in &entries {
        println!("{}", entry.render());
    }
    if is_complete(&entries) {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::INCOMPLETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_run() {
        let cli = Cli::parse_from(["bootstrap"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.target.variant(), Variant::Full);
    }

    #[test]
    fn top_level_flags_apply_to_implicit_run() {
        let cli = Cli::parse_from(["bootstrap", "--root", "/tmp/x", "--toolchain-only"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.target.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.target.variant(), Variant::ToolchainOnly);
    }

    #[test]
    fn parse_status_with_root() {
        let cli = Cli::parse_from(["bootstrap", "status", "--root", "proj"]);
        match cli.command {
            Some(Command::Status(args)) => {
                assert_eq!(args.root, Some(PathBuf::from("proj")));
                assert_eq!(args.variant(), Variant::Full);
            }
            _ => panic!("expected status"),
        }
    }

    #[test]
    fn relative_root_resolves_to_absolute() {
        let cli = Cli::parse_from(["bootstrap", "--root", "proj"]);
        let root = cli.target.resolve_root().expect("resolve");
        let cwd = std::env::current_dir().expect("cwd");
        assert!(root.is_absolute());
        assert_eq!(root, cwd.join("proj"));
    }

    #[test]
    fn parse_run_toolchain_only() {
        let cli = Cli::parse_from(["bootstrap", "run", "--toolchain-only"]);
        assert!(matches!(
            cli.command,
            Some(Command::Run(TargetArgs {
                toolchain_only: true,
                ..
            }))
        ));
    }
}
