//! # Suite Classification Module / 套件分类模块
//!
//! Pure logic for suite mode: parsing the expected-failures fixture,
//! discovering test scripts, and classifying each outcome against the
//! expectations. Subprocess launching lives in `infra::command`; this module
//! never touches a process.
//!
//! 套件模式的纯逻辑：解析预期失败基准文件、发现测试脚本，
//! 并根据预期对每个结果进行分类。子进程的启动位于 `infra::command`；
//! 此模块不接触任何进程。

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::core::models::{Notice, ScriptOutcome};

/// Name of the fixture listing test identifiers known to currently fail.
pub const EXPECTED_FAILURES_FILE: &str = "expected-failures.txt";

/// Filename pattern used to discover test scripts.
pub const SCRIPT_PATTERN: &str = "test*.sh";

/// Parses the expected-failures fixture into a membership set.
///
/// Each non-blank line contributes its first whitespace-delimited token as a
/// test identifier; anything after the first token is free-form commentary
/// (e.g. `test_foo.sh known issue #42`). Blank lines are ignored. Line order
/// carries no meaning.
pub fn parse_expected_failures(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Discovers test scripts matching `test*.sh` directly inside `dir`.
///
/// Returns bare file names, sorted lexicographically. The underlying
/// directory listing order is platform-dependent, so the list is sorted
/// explicitly to keep suite output deterministic.
pub fn discover_scripts(dir: &Path) -> Result<Vec<String>> {
    let pattern_path = dir.join(SCRIPT_PATTERN);
    let pattern = pattern_path
        .to_str()
        .with_context(|| format!("Suite directory path is not valid UTF-8: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in glob::glob(pattern).context("Invalid test script glob pattern")? {
        let path = entry.context("Failed to read a directory entry during script discovery")?;
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Classifies one script outcome against the expected-failures set.
///
/// A pass for an identifier in the set is an unexpected pass; a failure for
/// an identifier not in the set is an unexpected failure. Outcomes that match
/// expectations produce no notice.
pub fn classify(
    name: &str,
    outcome: ScriptOutcome,
    expected_failures: &HashSet<String>,
) -> Option<Notice> {
    let expected_to_fail = expected_failures.contains(name);
    match outcome {
        ScriptOutcome::Passed if expected_to_fail => Some(Notice::UnexpectedPass),
        ScriptOutcome::Failed if !expected_to_fail => Some(Notice::UnexpectedFail),
        _ => None,
    }
}
