use crate::cli::{context::CliContext, output, registry::CommandEntry};
use crate::errors::CommandResult;
use crate::utils::build_info;
use crate::AppError;

pub(super) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
    ]
}

fn cmd_help(context: &mut CliContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .get(&name.to_lowercase())
            .ok_or_else(|| AppError::Command(format!("unknown command `{name}`")))?;
        output::section(entry.name);
        output::info(entry.description);
        output::info(format!("usage: budget_watch {}", entry.usage));
        return Ok(());
    }

    output::section("Available commands");
    let rows: Vec<(&str, &str)> = context
        .registry
        .list()
        .into_iter()
        .map(|entry| (entry.usage, entry.description))
        .collect();
    output::two_column(&rows);
    Ok(())
}

fn cmd_version(_context: &mut CliContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("budget_watch {}", meta.version));
    output::two_column(&meta.rows());
    Ok(())
}
