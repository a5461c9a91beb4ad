//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness:
//! per-script outcomes, classification notices, the suite tally, and the
//! golden-output verdict.
//!
//! 此模块定义了整个工具中使用的核心数据结构：
//! 每个脚本的结果、分类通知、套件统计和黄金输出判定。

use std::process::ExitStatus;

/// The outcome of running a single test script: exit code 0 is a pass,
/// anything else is a failure. Captured output is discarded; only the
/// status matters to the tally.
///
/// 运行单个测试脚本的结果：退出码 0 视为通过，其余视为失败。
/// 捕获的输出会被丢弃；统计只关心退出状态。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScriptOutcome {
    Passed,
    Failed,
}

impl ScriptOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            ScriptOutcome::Passed
        } else {
            ScriptOutcome::Failed
        }
    }

    pub fn is_pass(self) -> bool {
        self == ScriptOutcome::Passed
    }
}

/// A per-script notice emitted when an outcome contradicts the
/// expected-failures list. Outcomes matching expectations stay silent.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Notice {
    /// The script passed although it is listed as a known failure
    /// (a flaky test or a fixed regression whose entry went stale).
    UnexpectedPass,
    /// The script failed and is not listed as a known failure.
    UnexpectedFail,
}

/// Aggregate counters for one suite run.
/// `passed + failed` always equals the number of scripts executed.
///
/// 一次套件运行的聚合计数。
/// `passed + failed` 恒等于已执行脚本的数量。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    /// Outcomes that contradicted the expected-failures list.
    pub unexpected: usize,
}

impl SuiteSummary {
    /// Records one script outcome and the notice (if any) it produced.
    pub fn record(&mut self, outcome: ScriptOutcome, notice: Option<Notice>) {
        match outcome {
            ScriptOutcome::Passed => self.passed += 1,
            ScriptOutcome::Failed => self.failed += 1,
        }
        if notice.is_some() {
            self.unexpected += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// `true` when every outcome matched the expected-failures list.
    pub fn is_clean(&self) -> bool {
        self.unexpected == 0
    }
}

/// The result of comparing captured output lines against a golden fixture.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verdict {
    Match,
    Mismatch,
}
