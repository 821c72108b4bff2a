// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::fs;

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

static MISSING_FOO: &str = "No .hash file found for \"foo.tar.gz\". If this is an out-of-tree file,
you need to provide its hash explicitly, like so:

  extraHashes = { \"foo.tar.gz\" = \"<sha256 from nix-prefetch-url>\"; }

";

fn expected_basic() -> Result<String> {
    Ok(fs::read_to_string("../brlock/test_workspaces/basic/expected.json")?)
}

#[test]
fn basic_to_stdout() -> Result<()> {
    Command::cargo_bin("brlock")?
        .args(["--input", "show-info.json", "--buildroot", "buildroot"])
        .current_dir("../brlock/test_workspaces/basic")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(format!("{}\n", expected_basic()?))
        .stderr("");

    Ok(())
}

#[test]
fn basic_to_file() -> Result<()> {
    let out_dir = TempDir::new()?;
    let out_path = out_dir.path().join("buildroot.lock");
    Command::cargo_bin("brlock")?
        .args(["--input", "show-info.json", "--buildroot", "buildroot", "-o"])
        .arg(&out_path)
        .current_dir("../brlock/test_workspaces/basic")
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&out_path)?, expected_basic()?);

    Ok(())
}

#[test]
fn reproducible_output() -> Result<()> {
    let run = || -> Result<Vec<u8>> {
        Ok(Command::cargo_bin("brlock")?
            .args(["--input", "show-info.json", "--buildroot", "buildroot"])
            .current_dir("../brlock/test_workspaces/basic")
            .output()?
            .stdout)
    };
    assert_eq!(run()?, run()?);

    Ok(())
}

#[test]
fn missing_checksum() -> Result<()> {
    let out_dir = TempDir::new()?;
    let out_path = out_dir.path().join("buildroot.lock");
    let output = Command::cargo_bin("brlock")?
        .args([
            "--input",
            "missing/show-info.json",
            "--buildroot",
            "basic/buildroot",
            "--output",
        ])
        .arg(&out_path)
        .current_dir("../brlock/test_workspaces")
        .env_remove("RUST_LOG")
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8(output.stderr)?, MISSING_FOO);
    assert!(!out_path.exists());

    Ok(())
}

#[test]
fn extra_hashes() -> Result<()> {
    let output = Command::cargo_bin("brlock")?
        .args([
            "--input",
            "out_of_tree/show-info.json",
            "--buildroot",
            "basic/buildroot",
            "--hashes",
            "out_of_tree/overrides.json",
        ])
        .current_dir("../brlock/test_workspaces")
        .output()?;
    assert!(output.status.success());
    let lockfile = brlock::lockfile_from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(lockfile.len(), 2);
    let blob = lockfile.get("vendor-blob-2.0.tar.gz").unwrap();
    assert_eq!(blob.algo(), "sha256");
    assert_eq!(
        blob.checksum(),
        "1a1b1c1d1e1f101112131415161718191a1b1c1d1e1f10111213141516171819"
    );

    Ok(())
}

#[test]
fn out_of_tree_without_extra_hashes() -> Result<()> {
    Command::cargo_bin("brlock")?
        .args([
            "--input",
            "out_of_tree/show-info.json",
            "--buildroot",
            "basic/buildroot",
        ])
        .current_dir("../brlock/test_workspaces")
        .assert()
        .code(1)
        .stdout("");

    Ok(())
}

#[test]
fn missing_buildroot() -> Result<()> {
    let output = Command::cargo_bin("brlock")?
        .args([
            "--input",
            "basic/show-info.json",
            "--buildroot",
            "no/such/buildroot",
        ])
        .current_dir("../brlock/test_workspaces")
        .output()?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("Could not index .hash files"));

    Ok(())
}

#[test]
fn missing_input() -> Result<()> {
    let output = Command::cargo_bin("brlock")?
        .args(["--input", "nope.json"])
        .current_dir("../brlock/test_workspaces")
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Could not read package info"));

    Ok(())
}
