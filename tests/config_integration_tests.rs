//! Tests for layering command-line flags over configuration files
use std::fs;
use std::path::PathBuf;

use bracket_lint::config::{CheckArgs, Config, ServerArgs, PROJECT_CONFIG_FILE};
use bracket_lint::OutputFormat;
use clap::Parser;

#[test]
fn test_project_config_is_discovered() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let project_file = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&project_file, "format = \"json\"\nlog_level = \"debug\"\n").expect("write config");

    let args = CheckArgs::try_parse_from(["bracket-lint", "src/lib.rs"]).expect("parse args");
    let config = Config::from_args_in(args, dir.path()).expect("create config");

    assert_eq!(config.config_file.as_deref(), Some(project_file.as_path()));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.paths, vec![PathBuf::from("src/lib.rs")]);
    assert!(!config.reads_stdin());
}

#[test]
fn test_flags_override_project_config() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "format = \"json\"\nlog_level = \"debug\"\n",
    )
    .expect("write config");

    let args = CheckArgs::try_parse_from([
        "bracket-lint",
        "--format",
        "text",
        "--log-level",
        "error",
    ])
    .expect("parse args");
    let config = Config::from_args_in(args, dir.path()).expect("create config");

    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.log_level, "error");
    assert!(config.reads_stdin());
}

#[test]
fn test_explicit_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "format = \"json\"\n").expect("write config");

    let args = CheckArgs::try_parse_from([
        "bracket-lint",
        "--config",
        custom.to_str().expect("utf8 path"),
        "-",
    ])
    .expect("parse args");
    let config = Config::from_args_in(args, dir.path()).expect("create config");

    assert_eq!(config.config_file.as_deref(), Some(custom.as_path()));
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.reads_stdin());
}

#[test]
fn test_malformed_config_names_the_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "format = \"yaml\"\n").expect("write config");

    let args = CheckArgs::try_parse_from(["bracket-lint"]).expect("parse args");
    let err = Config::from_args_in(args, dir.path()).expect_err("invalid format");

    assert!(format!("{:#}", err).contains(PROJECT_CONFIG_FILE));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let args = CheckArgs::try_parse_from(["bracket-lint", "--config", "does-not-exist.toml"])
        .expect("parse args");

    assert!(Config::from_args_in(args, dir.path()).is_err());
}

#[test]
fn test_server_config_uses_project_log_level() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "log_level = \"trace\"\n")
        .expect("write config");

    let args = ServerArgs::try_parse_from(["bracket-ls", "--stdio"]).expect("parse args");
    let config = Config::from_server_args_in(args, dir.path()).expect("create config");

    assert_eq!(config.log_level, "trace");
    assert!(config.paths.is_empty());
    assert!(!config.watch);
}
