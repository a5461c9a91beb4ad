//! # Golden-output Comparison Module / 黄金输出对比模块
//!
//! Pure logic for single-case mode: splitting captured output into lines,
//! applying the head cap, comparing against the fixture, and rendering a
//! unified diff on mismatch.
//!
//! 单用例模式的纯逻辑：将捕获的输出拆分为行、应用行数上限、
//! 与基准文件对比，并在不一致时渲染统一差异。

use similar::TextDiff;

use crate::core::models::Verdict;

/// Splits text on `\n` without dropping a trailing empty segment.
///
/// `str::lines` would swallow the distinction between output that ends with a
/// newline and output that does not; fixtures are compared trailing-newline
/// sensitive, so a plain split is used on both sides.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Keeps only the first `head` lines when a cap is given.
/// Differences beyond the cap cannot affect the verdict.
pub fn cap_lines(mut lines: Vec<String>, head: Option<usize>) -> Vec<String> {
    if let Some(n) = head {
        lines.truncate(n);
    }
    lines
}

/// Compares captured lines against fixture lines for exact equality.
pub fn compare_lines(got: &[String], want: &[String]) -> Verdict {
    if got == want {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// Renders a unified diff between captured output (`got`) and the fixture
/// (`want`). Only called on mismatch, so the result is never empty.
pub fn render_diff(got: &[String], want: &[String]) -> String {
    let got_text = got.join("\n");
    let want_text = want.join("\n");
    TextDiff::from_lines(got_text.as_str(), want_text.as_str())
        .unified_diff()
        .header("got", "want")
        .to_string()
}

/// Final pass/fail decision for the comparator.
///
/// Normally a match passes. With `expect_fail` set the verdict is inverted:
/// the case is only considered passing when the output does *not* match the
/// fixture.
pub fn passes(verdict: Verdict, expect_fail: bool) -> bool {
    let matched = verdict == Verdict::Match;
    matched != expect_fail
}
