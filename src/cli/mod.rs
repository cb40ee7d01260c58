//! Command-line front end: one command per process invocation.

pub mod commands;
pub mod context;
pub mod output;
pub mod registry;

use bw_config::ConfigManager;

use crate::AppError;
use context::CliContext;
use registry::CommandRegistry;

/// Runs one command from `args` (program name excluded). No arguments prints help.
pub fn run_cli(args: Vec<String>) -> Result<(), AppError> {
    let manager = ConfigManager::from_env()?;
    run_with_manager(args, manager)
}

/// Same as [`run_cli`] with an explicit config location.
pub fn run_with_manager(args: Vec<String>, manager: ConfigManager) -> Result<(), AppError> {
    let registry = CommandRegistry::with_entries(commands::all_entries());
    let mut context = CliContext::new(registry, manager);

    let words: Vec<&str> = args.iter().map(String::as_str).collect();
    let (name, rest) = match words.split_first() {
        Some((name, rest)) => (name.to_lowercase(), rest),
        None => ("help".to_string(), &[][..]),
    };
    let handler = context
        .registry
        .handler(&name)
        .ok_or_else(|| AppError::Command(format!("unknown command `{name}`; try `help`")))?;
    handler(&mut context, rest)
}
