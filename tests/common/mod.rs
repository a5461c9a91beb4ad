// Shared test helpers for integration tests
#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates an executable shell script that exits with `exit_code`.
pub fn write_script(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    write_script_body(dir, name, &format!("#!/bin/sh\nexit {exit_code}\n"))
}

/// Creates an executable shell script with the given body.
pub fn write_script_body(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write script");
    make_executable(&path);
    path
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod script");
}

/// Sets up a suite directory containing an expected-failures fixture.
pub fn setup_suite_dir(expected_failures: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        temp_dir.path().join("expected-failures.txt"),
        expected_failures,
    )
    .expect("Failed to write expected-failures.txt");
    temp_dir
}

/// Sets up an examples directory holding one target program that prints
/// the given lines to stdout, one per `echo`.
pub fn setup_examples_dir(target_name: &str, lines: &[&str]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let mut body = String::from("#!/bin/sh\n");
    for line in lines {
        body.push_str(&format!("echo '{line}'\n"));
    }
    write_script_body(temp_dir.path(), target_name, &body);
    temp_dir
}
