#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;

const PAGELINKS_VARS: [&str; 6] = [
    "PAGELINKS_CONFIG",
    "PAGELINKS_PROFILE",
    "PAGELINKS_PAGE_SIZE",
    "PAGELINKS_FORMAT",
    "PAGELINKS_JSON_PRETTY",
    "RUST_LOG",
];

/// A `pagelinks` invocation isolated from the caller's config files and env.
pub fn pagelinks(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("pagelinks");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("NO_COLOR", "1");
    for key in PAGELINKS_VARS {
        cmd.env_remove(key);
    }
    cmd
}

pub fn run_json<I, S>(dir: &Path, args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = pagelinks(dir);
    cmd.args(args);
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("json")
}

pub fn labels(value: &Value) -> Vec<String> {
    value["links"]
        .as_array()
        .expect("links array")
        .iter()
        .map(|link| link["label"].as_str().expect("label").to_string())
        .collect()
}

pub fn targets(value: &Value) -> Vec<Option<i64>> {
    value["links"]
        .as_array()
        .expect("links array")
        .iter()
        .map(|link| link["target"].as_i64())
        .collect()
}
