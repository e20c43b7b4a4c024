//! Integration tests for the config and models commands.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_config_path_honours_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leafix.toml");

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("config").arg("path").arg("--config").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("leafix.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut init = cargo_bin_cmd!("leafix");
    init.args(["config", "init", "--config"]).arg(&path);
    init.assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    let mut show = cargo_bin_cmd!("leafix");
    show.args(["config", "show", "--config"]).arg(&path);
    show.assert()
        .success()
        .stdout(predicate::str::contains("threshold = 0.6"))
        .stdout(predicate::str::contains("MobileNetV2"))
        .stdout(predicate::str::contains("ResNet50V2"));
}

#[test]
fn test_config_init_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nthreshold = 0.9\n").unwrap();

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.args(["config", "init", "--config"]).arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("0.9"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nthreshold = 65.0\n").unwrap();

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.args(["models", "list", "--config"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be between"));
}

#[test]
fn test_models_list_shows_builtin_models() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.args(["models", "list", "--config"]).arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MobileNetV2"))
        .stdout(predicate::str::contains("mobilenetv2_model45_2.onnx"))
        .stdout(predicate::str::contains("ResNet50V2"));
}
