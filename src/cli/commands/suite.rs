//! # Suite Command Module / 套件命令模块
//!
//! This module implements the `suite` command: build the target programs in
//! the sibling examples directory, run every `test*.sh` script once, classify
//! each outcome against the expected-failures list, and print the tally.
//!
//! 此模块实现 `suite` 命令：构建同级 examples 目录中的目标程序，
//! 逐一运行所有 `test*.sh` 脚本，根据预期失败列表对每个结果进行分类，
//! 并打印统计。

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::models::{ScriptOutcome, SuiteSummary};
use crate::core::suite::{classify, discover_scripts, parse_expected_failures, EXPECTED_FAILURES_FILE};
use crate::infra::{command, fs, t};
use crate::reporting::console;

/// Options for the suite command. The defaults reproduce a plain
/// `suite-runner suite` invocation from inside the suite directory.
pub struct SuiteOptions {
    /// Directory holding the test scripts and fixtures.
    pub dir: PathBuf,
    /// Directory holding the buildable target programs.
    /// Defaults to `<dir>/../examples`.
    pub examples_dir: Option<PathBuf>,
    /// Parallelism handed to the external build tool.
    pub jobs: usize,
    /// Skip the examples build step entirely.
    pub skip_build: bool,
}

/// Executes the suite command.
///
/// Scripts run sequentially, each exactly once, with output suppressed and no
/// shared state between executions. The process exits 0 only when every
/// outcome matched the expected-failures list.
pub async fn execute(opts: SuiteOptions) -> Result<ExitCode> {
    let suite_dir = fs::absolute_path(&opts.dir)?;
    let examples_dir = opts
        .examples_dir
        .unwrap_or_else(|| fs::sibling_examples_dir(&suite_dir));

    if !opts.skip_build {
        build_examples(&examples_dir, opts.jobs).await?;
    }

    let expected_path = suite_dir.join(EXPECTED_FAILURES_FILE);
    let expected_content = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("Failed to read {}", expected_path.display()))?;
    let expected_failures = parse_expected_failures(&expected_content);

    let scripts = discover_scripts(&suite_dir)?;
    if scripts.is_empty() {
        println!(
            "{}",
            t!("suite.no_scripts", dir = suite_dir.display()).yellow()
        );
    }

    let mut summary = SuiteSummary::default();
    for name in &scripts {
        let outcome = run_script(&suite_dir, name).await?;
        let notice = classify(name, outcome, &expected_failures);
        if let Some(notice) = notice {
            console::print_notice(notice, name);
        }
        summary.record(outcome, notice);
    }

    console::print_tally(&summary);

    if summary.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Builds the target programs via `make -C <examples_dir> -j <jobs>`.
/// A failing build aborts the run before any script executes, so a broken
/// build surfaces as a build error instead of every test failing.
async fn build_examples(examples_dir: &Path, jobs: usize) -> Result<()> {
    println!(
        "{}",
        t!("suite.building_examples", dir = examples_dir.display(), jobs = jobs).blue()
    );
    let code = command::run_tool(
        "make",
        &[
            "-C".to_string(),
            examples_dir.display().to_string(),
            "-j".to_string(),
            jobs.to_string(),
        ],
        Path::new("."),
    )
    .await
    .context("Failed to launch make")?;

    if code != 0 {
        anyhow::bail!(t!("suite.build_failed", code = code).to_string());
    }
    Ok(())
}

/// Runs one test script with output suppressed and maps its exit status to a
/// pass/fail outcome.
async fn run_script(suite_dir: &Path, name: &str) -> Result<ScriptOutcome> {
    let status = command::run_silenced(&suite_dir.join(name), suite_dir)
        .await
        .with_context(|| format!("Failed to execute test script {name}"))?;
    Ok(ScriptOutcome::from_status(status))
}
