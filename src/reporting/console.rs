//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the harness's console output: per-script notices for
//! outcomes that contradict expectations, the final tally line, and the
//! golden-output verdict with its unified diff.
//!
//! 此模块处理本工具的控制台输出：与预期相悖结果的每脚本通知、
//! 最终统计行，以及带统一差异的黄金输出判定。

use colored::*;

use crate::core::models::{Notice, SuiteSummary};
use crate::infra::t;

/// Prints the notice for one script whose outcome contradicted the
/// expected-failures list. Matching outcomes print nothing.
///
/// 打印一个结果与预期失败列表相悖的脚本的通知。
/// 符合预期的结果不打印任何内容。
pub fn print_notice(notice: Notice, name: &str) {
    match notice {
        Notice::UnexpectedPass => {
            println!("{}", t!("suite.unexpected_pass", name = name).yellow());
        }
        Notice::UnexpectedFail => {
            println!("{}", t!("suite.unexpected_fail", name = name).red());
        }
    }
}

/// Prints the final tally line, `PASS: <p> / FAIL: <f>`.
/// The two counters always sum to the number of scripts executed.
pub fn print_tally(summary: &SuiteSummary) {
    println!(
        "{}",
        t!("suite.tally", passed = summary.passed, failed = summary.failed).bold()
    );
}

/// Prints the comparator verdict: `OK` on a passing case, `FAIL` plus the
/// unified diff (labeled `got`/`want`) otherwise. The diff is empty for a
/// failing case whose output matched the fixture (expect-fail inversion).
pub fn print_verdict(pass: bool, diff: &str) {
    if pass {
        println!("{}", t!("compare.ok").green());
    } else {
        println!("{}", t!("compare.fail").red());
        if !diff.is_empty() {
            print!("{}", diff);
        }
    }
}
