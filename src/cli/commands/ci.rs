//! # CI Command Module / CI 命令模块
//!
//! This module implements the `ci` command: an optional CMake
//! configure-and-build step followed by a ctest run, with every external
//! exit code forwarded as this process's own.
//!
//! 此模块实现 `ci` 命令：可选的 CMake 配置与构建步骤，
//! 之后运行 ctest，并将所有外部退出码作为本进程的退出码转发。

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::commands::forward;
use crate::infra::{command, t};

/// Executes the ci command with the provided arguments.
///
/// When `build` is set, the build step runs first and a non-zero exit code
/// short-circuits the whole run: the test step is never attempted and the
/// build tool's code becomes the process exit code. Otherwise the ctest exit
/// code is forwarded.
pub async fn execute(build: bool, build_dir: PathBuf, config: String) -> Result<ExitCode> {
    if build {
        let code = run_build(&build_dir, &config).await?;
        if code != 0 {
            return Ok(forward(code));
        }
    }

    let code = run_tests(&build_dir, &config).await?;
    Ok(forward(code))
}

/// Runs the two-step CMake build inside `build_dir`: generate project files
/// for `config`, then compile with `-j <ncpus>`. If the compile step fails it
/// is retried once without `-j`, tolerating build tools that reject the
/// parallelism flag. Returns the last exit code observed.
async fn run_build(build_dir: &Path, config: &str) -> Result<i32> {
    println!(
        "{}",
        t!("ci.configuring", config = config, dir = build_dir.display()).blue()
    );
    let code = command::run_tool(
        "cmake",
        &[format!("-DCMAKE_BUILD_TYPE={config}"), "..".to_string()],
        build_dir,
    )
    .await
    .with_context(|| format!("Failed to launch cmake in {}", build_dir.display()))?;

    if code != 0 {
        println!("{}", t!("ci.configure_failed", code = code).red());
        return Ok(code);
    }

    let jobs = num_cpus::get();
    println!(
        "{}",
        t!("ci.compiling", config = config, jobs = jobs).blue()
    );
    let compile_args = vec![
        "--build".to_string(),
        ".".to_string(),
        "--config".to_string(),
        config.to_string(),
    ];
    let mut parallel_args = compile_args.clone();
    parallel_args.push("-j".to_string());
    parallel_args.push(jobs.to_string());

    let mut code = command::run_tool("cmake", &parallel_args, build_dir)
        .await
        .with_context(|| format!("Failed to launch cmake --build in {}", build_dir.display()))?;

    if code != 0 {
        println!("{}", t!("ci.compile_retry").yellow());
        code = command::run_tool("cmake", &compile_args, build_dir)
            .await
            .with_context(|| {
                format!("Failed to launch cmake --build in {}", build_dir.display())
            })?;
    }

    if code != 0 {
        println!("{}", t!("ci.compile_failed", code = code).red());
    }
    Ok(code)
}

/// Runs `ctest -C <config> -V` inside `<build_dir>/tests` and returns its
/// exit code.
async fn run_tests(build_dir: &Path, config: &str) -> Result<i32> {
    let test_dir = build_dir.join("tests");
    println!(
        "{}",
        t!("ci.running_tests", config = config, dir = test_dir.display()).blue()
    );
    command::run_tool("ctest", &["-C", config, "-V"], &test_dir)
        .await
        .with_context(|| format!("Failed to launch ctest in {}", test_dir.display()))
}
