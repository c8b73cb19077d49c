use std::io::{self, Write};

use anyhow::Result;

use crate::cli::CliArgs;
use crate::commands::common;
use crate::config;
use crate::output::{self, TableOptions, json, table};

pub fn run(args: &CliArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = output::select_format(&args.output, &resolved.settings);

    if args.quiet {
        return Ok(());
    }

    match format {
        config::OutputFormat::Json => {
            let payload = json::config_to_json(&resolved);
            let body = json::emit_json_value(&payload, resolved.settings.output.json_pretty)?;
            println!("{}", body);
        }
        _ => {
            let rows = vec![
                (
                    "configPath".to_string(),
                    resolved
                        .config_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(none)".to_string()),
                ),
                ("profileName".to_string(), resolved.profile_name.clone()),
                ("pageSize".to_string(), resolved.page_size.to_string()),
                (
                    "defaultFormat".to_string(),
                    resolved.settings.output.default_format.as_str().to_string(),
                ),
                (
                    "jsonPretty".to_string(),
                    resolved.settings.output.json_pretty.to_string(),
                ),
                (
                    "showSummary".to_string(),
                    resolved.settings.output.show_summary.to_string(),
                ),
            ];

            // plain has no key/value layout of its own
            let table_format = match format {
                config::OutputFormat::Plain => config::OutputFormat::Markdown,
                other => other,
            };
            let rendered = table::render_key_value_table(
                "Config",
                &rows,
                table_format,
                &TableOptions::default(),
            );
            writeln!(io::stdout(), "{}", rendered)?;
        }
    }

    Ok(())
}
