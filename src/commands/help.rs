use std::io::{self, Write};

use anyhow::anyhow;

use crate::cli::build_cli;

pub fn run(show_all: bool, command: Option<&str>) -> anyhow::Result<()> {
    // Hidden commands stay reachable by name even without --all
    let mut cmd = build_cli(show_all || command.is_some());

    if let Some(name) = command {
        let sub = cmd
            .find_subcommand_mut(name)
            .ok_or_else(|| anyhow!("Unknown command: {}", name))?;
        sub.print_long_help()?;
        io::stdout().flush()?;
        return Ok(());
    }

    cmd.print_long_help()?;
    io::stdout().flush()?;
    Ok(())
}
