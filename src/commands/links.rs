use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{CliArgs, PagerArgs};
use crate::commands::common;
use crate::config::OutputFormat;
use crate::output::{json, plain, table};

pub fn run(args: &CliArgs, cmd: &PagerArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);
    let pager = common::build_pager(cmd, &resolved)?;

    if args.quiet {
        return Ok(());
    }

    let body = match format {
        OutputFormat::Json => {
            json::emit_json_value(&json::pager_to_json(&pager), common::json_pretty(&resolved))?
        }
        OutputFormat::Plain => plain::render_links_line(&pager.links_to_print()),
        _ => table::render_links_table(&pager, format, &common::table_options(&resolved)),
    };
    writeln!(io::stdout(), "{}", body)?;

    Ok(())
}
