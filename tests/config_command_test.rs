mod common;

use std::fs;
use tempfile::TempDir;

#[test]
fn config_command_emits_json() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = common::pagelinks(temp_dir.path());
    cmd.args(["config", "--json"])
        .env("PAGELINKS_PAGE_SIZE", "25")
        .env("PAGELINKS_FORMAT", "plain");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json");

    assert_eq!(value["profileName"], "default");
    assert_eq!(value["pageSize"], 25);
    assert_eq!(value["settings"]["output"]["defaultFormat"], "plain");
    assert!(value["configPath"].is_null());
}

#[test]
fn profile_page_size_drives_links() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pager.yaml");
    fs::write(
        &config_path,
        "profiles:\n  default:\n    pageSize: 10\n  wide:\n    pageSize: 50\n",
    )
    .expect("write config");

    let config = config_path.to_str().expect("utf-8 path");
    let value = common::run_json(
        temp_dir.path(),
        ["--config", config, "--profile", "wide", "links", "--items", "100", "--json"],
    );
    assert_eq!(value["pageSize"], 50);
    assert_eq!(value["numberOfPages"], 2);
}

#[test]
fn local_config_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".pagelinks");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(
        config_dir.join("config.json"),
        r#"{ "profiles": { "default": { "pageSize": 4 } } }"#,
    )
    .expect("write config");

    let value = common::run_json(temp_dir.path(), ["config", "--json"]);
    assert_eq!(value["pageSize"], 4);
    assert!(
        value["configPath"]
            .as_str()
            .expect("config path")
            .ends_with("config.json")
    );
}

#[test]
fn missing_config_file_fails_with_config_kind() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = common::pagelinks(temp_dir.path());
    let output = cmd
        .args(["--config", "missing.yaml", "config", "--json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(value["error"]["kind"], "Config");
}
