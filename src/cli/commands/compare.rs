//! # Compare Command Module / 对比命令模块
//!
//! This module implements the `compare` command: run one target program,
//! capture its merged stdout/stderr, and compare the (optionally capped)
//! lines against the `<name>.out` golden fixture in the current directory.
//!
//! 此模块实现 `compare` 命令：运行一个目标程序，捕获其合并的
//! stdout/stderr，并将（可选截断的）行与当前目录中的 `<name>.out`
//! 黄金基准文件进行对比。

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::compare::{cap_lines, compare_lines, passes, render_diff, split_lines};
use crate::core::models::Verdict;
use crate::infra::{command, fs};
use crate::reporting::console;

/// Options for the compare command, as invoked by a wrapping test script.
pub struct CompareOptions {
    /// Fixture stem; expected output is `<name>.out` in the current directory.
    pub name: String,
    /// Target program, relative to the examples directory.
    pub target: String,
    /// Arguments forwarded to the target.
    pub args: Vec<String>,
    /// Compare only the first N captured lines.
    pub head: Option<usize>,
    /// Inverted verdict: a mismatch is the passing outcome.
    pub expect_fail: bool,
    /// Directory the target is resolved under. Defaults to `../examples`.
    pub examples_dir: Option<PathBuf>,
}

/// Executes the compare command.
///
/// The target's own exit status does not influence the verdict; only its
/// output does. There is no timeout on the target, so a hanging program
/// blocks the comparator until killed externally.
pub async fn execute(opts: CompareOptions) -> Result<ExitCode> {
    let examples_dir = opts
        .examples_dir
        .unwrap_or_else(|| fs::sibling_examples_dir(std::path::Path::new(".")));
    let target = examples_dir.join(&opts.target);

    let mut cmd = tokio::process::Command::new(&target);
    cmd.args(&opts.args).kill_on_drop(true);

    let (status_res, output) = command::spawn_and_capture(cmd).await;
    status_res.with_context(|| format!("Failed to run target {}", target.display()))?;

    let got = cap_lines(split_lines(&output), opts.head);

    let fixture = fs::fixture_path(&opts.name);
    let want_text = fs::read_fixture(&fixture)?;
    let want = split_lines(&want_text);

    let verdict = compare_lines(&got, &want);
    let pass = passes(verdict, opts.expect_fail);
    let diff = if verdict == Verdict::Mismatch {
        render_diff(&got, &want)
    } else {
        String::new()
    };

    console::print_verdict(pass, &diff);

    if pass {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
