//! # Reporting Module / 报告模块
//!
//! Console reporting for the harness: per-script notices, the final tally
//! line, and golden-output verdicts with their unified diff.
//!
//! 本工具的控制台报告：每个脚本的通知、最终统计行、
//! 以及带统一差异的黄金输出判定。

pub mod console;
