use std::io;

use anyhow::Result;
use clap_complete::generate;

use crate::cli::{CliArgs, CompletionsArgs, build_cli};
use crate::error::{AppError, ErrorKind};

pub fn run(_args: &CliArgs, cmd: &CompletionsArgs) -> Result<()> {
    let shell = cmd
        .shell
        .ok_or_else(|| AppError::new(ErrorKind::InvalidArgument, "--shell is required"))?;

    let mut command = build_cli(true);
    let bin_name = command.get_name().to_string();
    tracing::debug!("Generating {} completions for {}", shell, bin_name);
    generate(shell, &mut command, bin_name, &mut io::stdout());
    Ok(())
}
