//! End-to-end tests that drive the `suite-runner` binary the way the
//! wrapping shell scripts and CI do: suite runs against an
//! expected-failures list, golden-output comparisons, and the build+test
//! driver with fake external tools on PATH.
//!
//! 端到端测试：像外层 shell 脚本和 CI 那样驱动 `suite-runner` 二进制，
//! 覆盖基于预期失败列表的套件运行、黄金输出对比，
//! 以及使用 PATH 上伪造外部工具的构建+测试驱动。

#![cfg(unix)]

mod common;

use assert_cmd::prelude::*;
use common::{setup_examples_dir, setup_suite_dir, write_script, write_script_body};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn runner() -> Command {
    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.arg("--lang").arg("en");
    cmd
}

/// A passing script plus a known-failing script must produce no notices and
/// the tally `PASS: 1 / FAIL: 1`, with exit code 0.
#[test]
fn test_suite_outcomes_matching_expectations_are_silent() {
    let suite = setup_suite_dir("test_foo.sh known issue\n");
    write_script(suite.path(), "test_foo.sh", 1);
    write_script(suite.path(), "test_bar.sh", 0);

    let mut cmd = runner();
    cmd.arg("suite")
        .arg("--dir")
        .arg(suite.path())
        .arg("--skip-build");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS: 1 / FAIL: 1"))
        .stdout(predicate::str::contains("Unexpected").not());
}

/// A pass on a listed identifier and a failure on an unlisted one must each
/// produce exactly one notice, and the run must exit non-zero.
#[test]
fn test_suite_reports_unexpected_outcomes() {
    let suite = setup_suite_dir("test_foo.sh flaky on arm\n");
    write_script(suite.path(), "test_foo.sh", 0);
    write_script(suite.path(), "test_baz.sh", 1);

    let mut cmd = runner();
    cmd.arg("suite")
        .arg("--dir")
        .arg(suite.path())
        .arg("--skip-build");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Unexpected PASS: test_foo.sh"))
        .stdout(predicate::str::contains("Unexpected FAIL: test_baz.sh"))
        .stdout(predicate::str::contains("PASS: 1 / FAIL: 1"));
}

#[test]
fn test_suite_missing_expected_failures_file_is_an_error() {
    let suite = tempfile::tempdir().unwrap();
    write_script(suite.path(), "test_foo.sh", 0);

    let mut cmd = runner();
    cmd.arg("suite")
        .arg("--dir")
        .arg(suite.path())
        .arg("--skip-build");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected-failures.txt"));
}

/// Without `--skip-build` the examples build runs first; pointing it at a
/// nonexistent directory must abort the run before any script executes.
#[test]
fn test_suite_build_failure_aborts_before_scripts() {
    let suite = setup_suite_dir("");
    write_script(suite.path(), "test_foo.sh", 0);

    let mut cmd = runner();
    cmd.arg("suite")
        .arg("--dir")
        .arg(suite.path())
        .arg("--examples-dir")
        .arg(suite.path().join("no_such_examples"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("PASS:").not());
}

#[test]
fn test_compare_matching_output_reports_ok() {
    let examples = setup_examples_dir("target.sh", &["hello", "world"]);
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_ok.out"), "hello\nworld\n").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_ok")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

/// Captured output is compared byte-for-byte: a target whose final line has
/// no trailing newline must match a fixture that also ends without one.
#[test]
fn test_compare_matches_unterminated_final_line() {
    let examples = tempfile::tempdir().unwrap();
    write_script_body(examples.path(), "target.sh", "#!/bin/sh\nprintf 'hello'\n");
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_noeol.out"), "hello").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_noeol")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

/// The converse must still mismatch: output ending in a newline is not equal
/// to a fixture without one.
#[test]
fn test_compare_trailing_newline_mismatch_is_detected() {
    let examples = setup_examples_dir("target.sh", &["hello"]);
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_eol.out"), "hello").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_eol")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert().code(1).stdout(predicate::str::contains("FAIL"));
}

/// With a cap of 3, lines four and five of the target's output must not
/// affect the verdict.
#[test]
fn test_compare_head_cap_ignores_trailing_divergence() {
    let examples = setup_examples_dir("target.sh", &["l1", "l2", "l3", "junk", "junk2"]);
    let suite = tempfile::tempdir().unwrap();
    // No trailing newline: the fixture holds exactly the three capped lines.
    fs::write(suite.path().join("case_head.out"), "l1\nl2\nl3").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_head")
        .arg("--head")
        .arg("3")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

#[test]
fn test_compare_mismatch_prints_unified_diff() {
    let examples = setup_examples_dir("target.sh", &["hello"]);
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_diff.out"), "goodbye\n").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_diff")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("--- got"))
        .stdout(predicate::str::contains("+++ want"))
        .stdout(predicate::str::contains("-hello"))
        .stdout(predicate::str::contains("+goodbye"));
}

/// `--expect-fail` inverts the verdict: the mismatching case passes.
#[test]
fn test_compare_expect_fail_passes_on_mismatch() {
    let examples = setup_examples_dir("target.sh", &["hello"]);
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_xfail.out"), "goodbye\n").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_xfail")
        .arg("--expect-fail")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

#[test]
fn test_compare_missing_fixture_is_an_error() {
    let examples = setup_examples_dir("target.sh", &["hello"]);
    let suite = tempfile::tempdir().unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_nofixture")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read fixture"));
}

/// Arguments after the target are forwarded verbatim to the target program.
#[test]
fn test_compare_forwards_target_arguments() {
    let examples = tempfile::tempdir().unwrap();
    write_script_body(examples.path(), "target.sh", "#!/bin/sh\necho \"$1 $2\"\n");
    let suite = tempfile::tempdir().unwrap();
    fs::write(suite.path().join("case_args.out"), "alpha beta\n").unwrap();

    let mut cmd = runner();
    cmd.current_dir(suite.path())
        .arg("compare")
        .arg("--name")
        .arg("case_args")
        .arg("--examples-dir")
        .arg(examples.path())
        .arg("target.sh")
        .arg("alpha")
        .arg("beta");

    cmd.assert().success().stdout(predicate::str::contains("OK"));
}

/// Installs a fake external tool on PATH that appends its invocation to a
/// log file and exits with the code produced by `body`.
fn fake_tool(bin_dir: &Path, name: &str, log_path: &Path, body: &str) {
    let script = format!("#!/bin/sh\necho \"{name} $*\" >> {}\n{body}\n", log_path.display());
    write_script_body(bin_dir, name, &script);
}

fn path_with(bin_dir: &Path) -> String {
    format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    )
}

/// A failing configure step must short-circuit the run: no compile, no
/// ctest, and the configure exit code forwarded as the process exit code.
#[test]
fn test_ci_configure_failure_short_circuits() {
    let temp = tempfile::tempdir().unwrap();
    let bin_dir = temp.path().join("bin");
    let build_dir = temp.path().join("build");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::create_dir_all(build_dir.join("tests")).unwrap();
    let log = temp.path().join("invocations.log");

    fake_tool(&bin_dir, "cmake", &log, "exit 3");
    fake_tool(&bin_dir, "ctest", &log, "exit 0");

    let mut cmd = runner();
    cmd.env("PATH", path_with(&bin_dir))
        .arg("ci")
        .arg("--build")
        .arg("--build_dir")
        .arg(&build_dir);

    cmd.assert().code(3);

    let invocations = fs::read_to_string(&log).unwrap();
    let cmake_calls = invocations.lines().filter(|l| l.starts_with("cmake")).count();
    assert_eq!(cmake_calls, 1, "compile step ran after failed configure");
    assert!(!invocations.contains("ctest"), "ctest ran after failed configure");
}

/// When the compile step rejects `-j`, it is retried once without the flag
/// and the run proceeds to ctest.
#[test]
fn test_ci_compile_retries_without_parallelism() {
    let temp = tempfile::tempdir().unwrap();
    let bin_dir = temp.path().join("bin");
    let build_dir = temp.path().join("build");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::create_dir_all(build_dir.join("tests")).unwrap();
    let log = temp.path().join("invocations.log");

    fake_tool(
        &bin_dir,
        "cmake",
        &log,
        "case \"$*\" in *\" -j \"*) exit 2;; esac\nexit 0",
    );
    fake_tool(&bin_dir, "ctest", &log, "exit 0");

    let mut cmd = runner();
    cmd.env("PATH", path_with(&bin_dir))
        .arg("ci")
        .arg("--build")
        .arg("--build_dir")
        .arg(&build_dir);

    cmd.assert().success();

    let invocations = fs::read_to_string(&log).unwrap();
    let cmake_calls = invocations.lines().filter(|l| l.starts_with("cmake")).count();
    assert_eq!(cmake_calls, 3, "expected configure, compile, and one retry");
    assert!(invocations.contains("ctest"));
}

/// Without `--build`, only ctest runs and its exit code is forwarded.
#[test]
fn test_ci_forwards_ctest_exit_code() {
    let temp = tempfile::tempdir().unwrap();
    let bin_dir = temp.path().join("bin");
    let build_dir = temp.path().join("build");
    fs::create_dir_all(&bin_dir).unwrap();
    fs::create_dir_all(build_dir.join("tests")).unwrap();
    let log = temp.path().join("invocations.log");

    fake_tool(&bin_dir, "cmake", &log, "exit 0");
    fake_tool(&bin_dir, "ctest", &log, "exit 7");

    let mut cmd = runner();
    cmd.env("PATH", path_with(&bin_dir))
        .arg("ci")
        .arg("--build_dir")
        .arg(&build_dir);

    cmd.assert().code(7);

    let invocations = fs::read_to_string(&log).unwrap();
    assert!(!invocations.contains("cmake"), "cmake ran without --build");
    assert!(invocations.contains("ctest -C Debug -V"));
}

/// Without `--lang`, the locale comes from the environment; a system locale
/// with no shipped catalog must fall back to English output.
#[test]
fn test_unshipped_system_locale_falls_back_to_english() {
    let suite = setup_suite_dir("");
    write_script(suite.path(), "test_foo.sh", 0);

    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.env("LC_ALL", "fr_FR.UTF-8")
        .env("LC_CTYPE", "fr_FR.UTF-8")
        .env("LANG", "fr_FR.UTF-8")
        .arg("suite")
        .arg("--dir")
        .arg(suite.path())
        .arg("--skip-build");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS: 1 / FAIL: 0"));
}

#[test]
fn test_ci_nonexistent_build_dir_is_an_error() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = runner();
    cmd.arg("ci")
        .arg("--build_dir")
        .arg(temp.path().join("no_such_dir"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
