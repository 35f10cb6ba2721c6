//! Integration tests for wadkit-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wadkit_core::test_utils::WadTestBuilder;
use wadkit_core::test_utils::create_test_zip;

fn wadkit_cmd() -> Command {
    cargo_bin_cmd!("wadkit")
}

fn write_fixture(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).expect("failed to write fixture");
    path
}

fn map_pwad(dir: &TempDir) -> PathBuf {
    let wad = WadTestBuilder::pwad()
        .add_lump("MAP01", b"")
        .add_lump("THINGS", &[0u8; 10])
        .add_lump("LINEDEFS", &[0u8; 14])
        .build();
    write_fixture(dir, "maps.wad", &wad)
}

#[test]
fn test_version_flag() {
    wadkit_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wadkit"));
}

#[test]
fn test_help_flag() {
    wadkit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("launch"));
}

#[test]
fn test_inspect_pwad() {
    let temp = TempDir::new().unwrap();
    let wad = map_pwad(&temp);

    wadkit_cmd()
        .arg("inspect")
        .arg(&wad)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: PWAD"))
        .stdout(predicate::str::contains("Lumps: 3"))
        .stdout(predicate::str::contains(" 000: MAP01 (0 bytes)"))
        .stdout(predicate::str::contains(" 002: LINEDEFS (14 bytes)"))
        .stdout(predicate::str::contains(" ...").not());
}

#[test]
fn test_inspect_large_iwad_is_truncated() {
    let temp = TempDir::new().unwrap();
    let mut builder = WadTestBuilder::iwad();
    for i in 0..25 {
        builder = builder.add_lump(&format!("LUMP{i:02}"), b"x");
    }
    let wad = write_fixture(&temp, "doom2.wad", &builder.build());

    wadkit_cmd()
        .arg("inspect")
        .arg(&wad)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: IWAD"))
        .stdout(predicate::str::contains("Lumps: 25"))
        .stdout(predicate::str::contains(" 019: LUMP19 (1 bytes)"))
        .stdout(predicate::str::contains("LUMP20").not())
        .stdout(predicate::str::contains(" ..."));
}

#[test]
fn test_inspect_pk3() {
    let temp = TempDir::new().unwrap();
    let zip = create_test_zip(vec![
        ("zscript.txt", &b"version \"4.10\""[..]),
        ("textures.txt", &b""[..]),
    ]);
    let pk3 = write_fixture(&temp, "mod.pk3", &zip);

    wadkit_cmd()
        .arg("inspect")
        .arg(&pk3)
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP entries: 2"))
        .stdout(predicate::str::contains(" 000: zscript.txt (14 bytes)"))
        .stdout(predicate::str::contains(" 001: textures.txt (0 bytes)"));
}

#[test]
fn test_inspect_unrecognized_file_shows_metadata_only() {
    let temp = TempDir::new().unwrap();
    let readme = write_fixture(&temp, "readme.txt", b"hello");

    wadkit_cmd()
        .arg("inspect")
        .arg(&readme)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 5 bytes"))
        .stdout(predicate::str::contains("Type:").not())
        .stdout(predicate::str::contains("ZIP entries").not());
}

#[test]
fn test_inspect_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let wad = map_pwad(&temp);

    wadkit_cmd()
        .arg("inspect")
        .arg(&wad)
        .arg(temp.path().join("missing.wad"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lumps: 3"))
        .stderr(predicate::str::contains("missing.wad"))
        .stderr(predicate::str::contains("1 of 2 files could not be read"));
}

#[test]
fn test_inspect_json_output() {
    let temp = TempDir::new().unwrap();
    let wad = map_pwad(&temp);

    let output = wadkit_cmd()
        .arg("--json")
        .arg("inspect")
        .arg(&wad)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "inspect");
    assert_eq!(json["status"], "success");

    let file = &json["data"]["files"][0];
    assert_eq!(file["kind"], "PWAD");
    assert_eq!(file["entry_count"], 3);
    assert_eq!(file["truncated"], false);
    assert_eq!(file["entries"][2]["name"], "LINEDEFS");
}

#[test]
fn test_launch_dry_run() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("wadkit.json");

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args([
            "launch", "--dry-run", "-e", "gzdoom", "-i", "doom2.wad", "-f", "a.wad", "-f",
            "b.pk3", "--", "-warp", "01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "gzdoom -iwad doom2.wad -file a.wad b.pk3 -warp 01",
        ));

    assert!(!config.exists(), "dry run without --save must not write");
}

#[test]
fn test_launch_without_engine_fails() {
    let temp = TempDir::new().unwrap();

    wadkit_cmd()
        .arg("--config")
        .arg(temp.path().join("wadkit.json"))
        .args(["launch", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No source port selected"));
}

#[test]
fn test_launch_save_then_reuse() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("wadkit.json");

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args([
            "launch", "--dry-run", "--save", "-e", "gzdoom", "-i", "doom.wad", "-f", "mod.wad",
        ])
        .assert()
        .success();
    assert!(config.exists());

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args(["launch", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gzdoom -iwad doom.wad -file mod.wad"));

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gzdoom"))
        .stdout(predicate::str::contains("mod.wad"));
}

#[test]
fn test_launch_warns_about_non_iwad() {
    let temp = TempDir::new().unwrap();
    let pwad = map_pwad(&temp);

    wadkit_cmd()
        .arg("--config")
        .arg(temp.path().join("wadkit.json"))
        .args(["launch", "--dry-run", "-e", "gzdoom", "-i"])
        .arg(&pwad)
        .assert()
        .success()
        .stderr(predicate::str::contains("is not an IWAD"));
}

#[test]
fn test_launch_json_warning_keeps_stdout_single_document() {
    let temp = TempDir::new().unwrap();
    let pwad = map_pwad(&temp);

    let output = wadkit_cmd()
        .arg("--json")
        .arg("--config")
        .arg(temp.path().join("wadkit.json"))
        .args(["launch", "--dry-run", "-e", "gzdoom", "-i"])
        .arg(&pwad)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "launch");
    assert_eq!(json["data"]["program"], "gzdoom");
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not an IWAD"));
}

#[test]
fn test_launch_json_save_reports_in_launch_envelope() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("wadkit.json");

    let output = wadkit_cmd()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .args(["launch", "--dry-run", "--save", "-e", "gzdoom"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "launch");
    assert!(json["data"]["saved_to"].as_str().unwrap().ends_with("wadkit.json"));
    assert!(config.exists());
}

#[test]
fn test_config_path() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.json");

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}

#[test]
fn test_config_reset() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("wadkit.json");
    fs::write(&config, r#"{"sourcePortPath": "gzdoom"}"#).unwrap();

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "reset"])
        .assert()
        .success();

    assert!(!config.exists());
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("wadkit.json");
    fs::write(&config, "{ nope").unwrap();

    wadkit_cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config reset"));
}

#[test]
fn test_completion_bash() {
    wadkit_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wadkit"));
}
