//! # Command Execution Module / 命令执行模块
//!
//! Subprocess launching for the harness. Every launch receives an explicit
//! working directory instead of mutating the process-wide current directory,
//! so no step depends on the order of earlier directory changes.
//!
//! 本工具的子进程启动。每次启动都会收到显式的工作目录，
//! 而不是修改进程级的当前目录，因此任何步骤都不依赖先前目录切换的顺序。

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Exit code reported for a child that terminated without one
/// (e.g. killed by a signal).
pub const SIGNAL_EXIT_CODE: i32 = 1;

/// Runs an external tool with inherited stdout/stderr and returns its exit
/// code. Used for the build system and test runner, whose output should
/// stream straight to the user.
///
/// 以继承的 stdout/stderr 运行外部工具并返回其退出码。
/// 用于构建系统和测试运行器，它们的输出应直接传给用户。
pub async fn run_tool<S: AsRef<std::ffi::OsStr>>(
    program: &str,
    args: &[S],
    cwd: &Path,
) -> std::io::Result<i32> {
    let status = tokio::process::Command::new(program)
        .args(args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .status()
        .await?;
    Ok(status.code().unwrap_or(SIGNAL_EXIT_CODE))
}

/// Runs a test script with stdout and stderr suppressed, returning its exit
/// status. Per-script output is noise in suite mode; only the status feeds
/// the tally.
pub async fn run_silenced(program: &Path, cwd: &Path) -> std::io::Result<std::process::ExitStatus> {
    tokio::process::Command::new(program)
        .current_dir(cwd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
}

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently as raw byte chunks and combined
/// into a single string. Bytes pass through untouched — no newline is added
/// to an unterminated final line and `\r` is preserved — so fixtures compare
/// against exactly what the child wrote. Invalid UTF-8 is decoded lossily
/// once, at the end.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 输出流以原始字节块的形式并发读取并合并到一个字符串中。
/// 字节原样保留——未以换行结尾的最后一行不会被补上换行，`\r` 也会保留——
/// 因此基准文件对比的正是子进程实际写出的内容。非法 UTF-8 在最后统一进行有损解码。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 合并的 stdout 和 stderr，为一个 `String`。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn() {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and an empty string for the output.
            return (Err(e), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture child stdout")),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture child stderr")),
                String::new(),
            );
        }
    };

    // Use an Arc<Mutex<Vec<u8>>> to allow concurrent writes from stdout and stderr tasks.
    // 使用 Arc<Mutex<Vec<u8>>> 来允许多个任务（stdout 和 stderr）并发写入。
    let output = Arc::new(tokio::sync::Mutex::new(Vec::new()));

    let stdout_output = Arc::clone(&output);
    let stdout_handle = tokio::spawn(async move {
        let mut reader = stdout;
        let mut buf = [0u8; 8192];
        loop {
            match reader.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => stdout_output.lock().await.extend_from_slice(&buf[..n]),
            }
        }
    });

    let stderr_output = Arc::clone(&output);
    let stderr_handle = tokio::spawn(async move {
        let mut reader = stderr;
        let mut buf = [0u8; 8192];
        loop {
            match reader.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => stderr_output.lock().await.extend_from_slice(&buf[..n]),
            }
        }
    });

    // Wait for the process to exit.
    let status = child.wait().await;

    // Wait for the reader tasks to complete to ensure all output is captured.
    // 等待读取任务完成，以确保所有输出都被捕获。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    let combined = String::from_utf8_lossy(&output.lock().await).into_owned();
    (status, combined)
}
