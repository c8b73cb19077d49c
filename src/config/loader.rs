use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use super::env::{Env, parse_bool};
use super::schema::{ConfigFile, OutputFormat, OutputSettings, Profile, Settings};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub profile: Option<String>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub cli: CliOverrides,
    pub cwd: PathBuf,
    pub home_dir: Option<PathBuf>,
    pub xdg_config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config_path: Option<PathBuf>,
    pub profile_name: String,
    pub page_size: i64,
    pub settings: SettingsResolved,
}

#[derive(Debug, Clone)]
pub struct SettingsResolved {
    pub output: OutputSettingsResolved,
}

#[derive(Debug, Clone)]
pub struct OutputSettingsResolved {
    pub default_format: OutputFormat,
    pub json_pretty: bool,
    pub show_summary: bool,
}

impl Default for SettingsResolved {
    fn default() -> Self {
        Self {
            output: OutputSettingsResolved {
                default_format: OutputFormat::Pretty,
                json_pretty: true,
                show_summary: true,
            },
        }
    }
}

pub fn load_config(options: &LoadOptions, env: &Env) -> Result<ResolvedConfig> {
    let config_path = resolve_config_path(options, env)?;
    let config_file = match &config_path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => ConfigFile::default(),
    };

    let profile_name = resolve_profile_name(options, env, config_file.default_profile.as_deref());

    let mut page_size = DEFAULT_PAGE_SIZE;
    let mut settings = SettingsResolved::default();

    if let Some(settings_cfg) = &config_file.settings {
        apply_settings(&mut settings, settings_cfg);
    }

    match config_file.profiles.get(&profile_name) {
        Some(profile) => apply_profile(&mut page_size, &mut settings, profile),
        None if config_path.is_some() && profile_name != "default" => {
            warn!("Profile '{}' not found in config; using defaults", profile_name);
        }
        None => {}
    }

    apply_env_overrides(&mut page_size, &mut settings, env);
    apply_cli_overrides(&mut page_size, &options.cli);

    debug!(
        "Resolved profile '{}' with page size {}",
        profile_name, page_size
    );

    Ok(ResolvedConfig {
        config_path,
        profile_name,
        page_size,
        settings,
    })
}

fn resolve_profile_name(options: &LoadOptions, env: &Env, default_profile: Option<&str>) -> String {
    if let Some(profile) = options.cli.profile.as_deref() {
        return profile.to_string();
    }
    if let Some(profile) = env.get("PAGELINKS_PROFILE") {
        return profile;
    }
    if let Some(profile) = default_profile {
        return profile.to_string();
    }
    "default".to_string()
}

fn resolve_config_path(options: &LoadOptions, env: &Env) -> Result<Option<PathBuf>> {
    if let Some(path) = &options.cli.config_path {
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(Some(path.clone()));
    }

    if let Some(path) = env.get("PAGELINKS_CONFIG") {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
        return Ok(Some(path));
    }

    if let Some(path) = find_local_config(&options.cwd, options.home_dir.as_deref()) {
        return Ok(Some(path));
    }

    if let Some(path) = find_global_config(options.xdg_config_dir.as_deref()) {
        return Ok(Some(path));
    }

    Ok(None)
}

fn find_local_config(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let candidates = [
        ".pagelinks/config.yaml",
        ".pagelinks/config.yml",
        ".pagelinks/config.json",
    ];

    for dir in start.ancestors() {
        for candidate in &candidates {
            let path = dir.join(candidate);
            if path.is_file() {
                return Some(path);
            }
        }

        if let Some(home_dir) = home {
            if dir == home_dir {
                break;
            }
        }
    }

    None
}

fn find_global_config(xdg_config: Option<&Path>) -> Option<PathBuf> {
    let base = xdg_config?;
    let candidates = [
        "pagelinks/config.yaml",
        "pagelinks/config.yml",
        "pagelinks/config.json",
    ];

    for candidate in &candidates {
        let path = base.join(candidate);
        if path.is_file() {
            return Some(path);
        }
    }

    None
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")
        }
        Some("json") => serde_json::from_str(&content).context("Failed to parse JSON config"),
        _ => Err(anyhow!("Unsupported config file extension")),
    }
}

fn apply_profile(page_size: &mut i64, settings: &mut SettingsResolved, profile: &Profile) {
    if let Some(size) = profile.page_size {
        *page_size = size;
    }
    if let Some(settings_profile) = &profile.settings {
        apply_settings(settings, settings_profile);
    }
}

fn apply_settings(settings: &mut SettingsResolved, overrides: &Settings) {
    if let Some(output) = &overrides.output {
        apply_output_settings(&mut settings.output, output);
    }
}

fn apply_output_settings(settings: &mut OutputSettingsResolved, overrides: &OutputSettings) {
    if let Some(default_format) = overrides.default_format {
        settings.default_format = default_format;
    }
    if let Some(pretty) = overrides.json.as_ref().and_then(|json| json.pretty) {
        settings.json_pretty = pretty;
    }
    if let Some(show_summary) = overrides.table.as_ref().and_then(|table| table.show_summary) {
        settings.show_summary = show_summary;
    }
}

fn apply_env_overrides(page_size: &mut i64, settings: &mut SettingsResolved, env: &Env) {
    if let Some(raw) = env.get("PAGELINKS_PAGE_SIZE") {
        match raw.trim().parse::<i64>() {
            Ok(size) => *page_size = size,
            Err(_) => warn!("Ignoring PAGELINKS_PAGE_SIZE={:?}: not an integer", raw),
        }
    }
    if let Some(raw) = env.get("PAGELINKS_FORMAT") {
        match OutputFormat::parse(&raw) {
            Some(format) => settings.output.default_format = format,
            None => warn!("Ignoring PAGELINKS_FORMAT={:?}: unknown format", raw),
        }
    }
    if let Some(pretty) = env.get("PAGELINKS_JSON_PRETTY").and_then(|v| parse_bool(&v)) {
        settings.output.json_pretty = pretty;
    }
}

fn apply_cli_overrides(page_size: &mut i64, cli: &CliOverrides) {
    if let Some(size) = cli.page_size {
        *page_size = size;
    }
}
