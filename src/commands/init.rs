use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde_json::json;

use crate::cli::{CliArgs, InitArgs};
use crate::commands::common;
use crate::config::{DEFAULT_PAGE_SIZE, OutputFormat};
use crate::output::json as json_out;

pub fn run(args: &CliArgs, cmd: &InitArgs) -> Result<()> {
    let resolved = common::load_config(args)?;
    let format = common::output_format(args, &resolved);

    let profile_name = args.profile.as_deref().unwrap_or("default");
    let target = resolve_target_path(cmd.path.as_ref());

    if target.exists() && !cmd.force {
        return Err(anyhow!("Config already exists: {}", target.display()));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let template = render_config_template(profile_name);
    fs::write(&target, template)?;
    tracing::info!("Wrote config template to {}", target.display());

    if args.quiet {
        return Ok(());
    }

    if matches!(format, OutputFormat::Json) {
        let payload = json!({
            "path": target.display().to_string(),
            "created": true,
            "overwritten": cmd.force,
        });
        let body = json_out::emit_json_value(&payload, common::json_pretty(&resolved))?;
        println!("{}", body);
    } else {
        println!("Wrote config to {}", target.display());
    }

    Ok(())
}

fn resolve_target_path(path: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = path {
        if path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml" | "json"))
        {
            return path.clone();
        }
        return path.join(".pagelinks").join("config.yaml");
    }

    Path::new(".pagelinks").join("config.yaml")
}

fn render_config_template(profile: &str) -> String {
    format!(
        r#"# pagelinks configuration

defaultProfile: {profile}
settings:
  output:
    # defaultFormat controls output when no explicit flag is used.
    # Values: pretty | markdown | json | plain
    defaultFormat: pretty
    json:
      # pretty controls indentation when emitting JSON.
      pretty: true
    table:
      # showSummary appends "Page P of N (items A-B of T)" below link tables.
      showSummary: true

profiles:
  {profile}:
    pageSize: {page_size}
"#,
        page_size = DEFAULT_PAGE_SIZE
    )
}
