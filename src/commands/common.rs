use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, CommandKind, PagerArgs};
use crate::config::OutputFormat;
use crate::config::{self, CliOverrides, ResolvedConfig};
use crate::error::{AppError, ErrorKind};
use crate::output::{self, TableOptions};
use crate::pager::Pager;

pub fn overrides_from_args(args: &CliArgs) -> CliOverrides {
    let page_size = match &args.command {
        CommandKind::Links(cmd) | CommandKind::Pages(cmd) => cmd.page_size,
        _ => None,
    };
    CliOverrides {
        config_path: args.config_path.clone(),
        env_file: args.env_file.clone(),
        profile: args.profile.clone(),
        page_size,
    }
}

pub fn load_config(args: &CliArgs) -> Result<ResolvedConfig> {
    let overrides = overrides_from_args(args);
    config::load_from_system(&overrides)
        .map_err(|err| AppError::new(ErrorKind::Config, err.to_string()).into())
}

pub fn output_format(args: &CliArgs, resolved: &ResolvedConfig) -> OutputFormat {
    output::select_format(&args.output, &resolved.settings)
}

pub fn json_pretty(resolved: &ResolvedConfig) -> bool {
    resolved.settings.output.json_pretty
}

pub fn table_options(resolved: &ResolvedConfig) -> TableOptions {
    TableOptions {
        show_summary: resolved.settings.output.show_summary,
        ..TableOptions::default()
    }
}

pub fn build_pager(cmd: &PagerArgs, resolved: &ResolvedConfig) -> Result<Pager> {
    let items = cmd
        .items
        .ok_or_else(|| AppError::new(ErrorKind::InvalidArgument, "--items is required"))?;
    let page = cmd.page.unwrap_or(1);
    debug!(
        "Building pager: items={} page_size={} page={}",
        items, resolved.page_size, page
    );
    Ok(Pager::new(items, resolved.page_size, page)?)
}
