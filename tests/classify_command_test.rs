//! Integration tests for the classify command's failure paths.
//!
//! None of these reach the network: uploads are rejected before any model is
//! fetched, and model sources point at a local port nothing listens on.

use assert_cmd::cargo::cargo_bin_cmd;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use predicates::prelude::*;
use serde_json::Value;
use std::net::TcpListener;
use std::path::{Path, PathBuf};

fn unused_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn write_leaf_png(dir: &Path) -> PathBuf {
    let path = dir.join("leaf.png");
    let image = RgbImage::from_pixel(64, 48, Rgb([40, 160, 60]));
    DynamicImage::ImageRgb8(image)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

fn write_unreachable_config(dir: &Path) -> PathBuf {
    let port = unused_port();
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!(
            r#"
[[models]]
name = "MobileNetV2"
url = "http://127.0.0.1:{port}/mobilenetv2.onnx"

[[models]]
name = "ResNet50V2"
url = "http://127.0.0.1:{port}/resnet50v2.onnx"

[download]
connect_timeout_secs = 2
timeout_secs = 5
"#
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_txt_upload_is_invalid_format() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("x.txt");
    std::fs::write(&upload, "hello").unwrap();

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("classify")
        .arg(&upload)
        .arg("--config")
        .arg(dir.path().join("none.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid file format 'x.txt'"))
        .stderr(predicate::str::contains(".jpg, .jpeg and .png"));
}

#[test]
fn test_corrupt_jpg_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let upload = dir.path().join("leaf.jpg");
    std::fs::write(&upload, b"this is not a jpeg").unwrap();

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("classify")
        .arg(&upload)
        .arg("--config")
        .arg(dir.path().join("none.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be read as an image"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("classify")
        .arg(dir.path().join("absent.png"))
        .arg("--config")
        .arg(dir.path().join("none.toml"));

    cmd.assert().failure().stderr(predicate::str::contains("error:"));
}

#[test]
fn test_download_failure_names_models_and_halts() {
    let dir = tempfile::tempdir().unwrap();
    let upload = write_leaf_png(dir.path());
    let config = write_unreachable_config(dir.path());

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("classify")
        .arg(&upload)
        .arg("--config")
        .arg(&config)
        .arg("--no-progress");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Confidence").not())
        .stderr(predicate::str::contains("MobileNetV2"))
        .stderr(predicate::str::contains("ResNet50V2"))
        .stderr(predicate::str::contains("cannot run without its models"));
}

#[test]
fn test_json_error_reports_kind() {
    let dir = tempfile::tempdir().unwrap();
    let upload = write_leaf_png(dir.path());
    let config = write_unreachable_config(dir.path());

    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.arg("classify")
        .arg(&upload)
        .args(["--format", "json", "--quiet", "--config"])
        .arg(&config);

    let output = cmd.assert().failure();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: Value = serde_json::from_str(&stdout).expect("valid JSON error");

    assert_eq!(json["kind"], "model_load_failure");
    assert!(json["message"].as_str().unwrap().contains("MobileNetV2"));
}

#[test]
fn test_threshold_on_percent_scale_is_rejected() {
    let mut cmd = cargo_bin_cmd!("leafix");
    cmd.args(["classify", "leaf.jpg", "--threshold", "65"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be between"));
}
