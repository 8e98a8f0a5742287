mod common;
use common::{rs, temp_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use readme_sync::config::Config;
use readme_sync::errors::AppError;
use std::fs;

#[test]
fn test_config_defaults() {
    let cfg = Config::from_yaml("").expect("empty config");
    assert_eq!(cfg.readme, "README.md");
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.retries, 0);
    assert!(cfg.csv_url.is_none());
    assert!(cfg.upstream().is_none());
    assert!(cfg.user_agent.starts_with("readme-sync/"));
}

#[test]
fn test_config_partial_yaml() {
    let cfg = Config::from_yaml(
        "csv_url: https://sheet.example/pub?output=csv\nretries: 2\nupstream_url: '  '\n",
    )
    .expect("valid yaml");
    assert_eq!(cfg.require_csv_url().unwrap(), "https://sheet.example/pub?output=csv");
    assert_eq!(cfg.retries, 2);
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.upstream().is_none());
}

#[test]
fn test_config_invalid_yaml() {
    let err = Config::from_yaml("retries: [not, a, number]\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_config_missing_csv_url() {
    let cfg = Config {
        csv_url: Some("   ".to_string()),
        ..Config::default()
    };
    assert!(matches!(cfg.require_csv_url(), Err(AppError::Config(_))));
}

#[test]
fn test_config_explicit_file_must_exist() {
    let err = Config::load(Some("/definitely/not/here/readme-sync.yaml")).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_cli_config_print_hides_csv_url() {
    let dir = temp_dir("config_print");
    fs::write(
        dir.join("readme-sync.yaml"),
        "csv_url: https://secret.example/pub?key=abc\nupstream_url: https://upstream-secret.example/README.md\nreadme: docs/README.md\n",
    )
    .unwrap();

    rs(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("readme: docs/README.md"))
        .stdout(contains("<set>"))
        .stdout(contains("secret.example").not())
        .stdout(contains("upstream-secret").not());
}
