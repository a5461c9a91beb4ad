//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner tool,
//! a thin orchestration harness around an external build system and test
//! runner, with a golden-output comparator for single test cases.
//!
//! 此库为 Suite Runner 工具提供核心功能，
//! 这是一个围绕外部构建系统和测试运行器的轻量编排工具，
//! 并带有针对单个测试用例的黄金输出对比器。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, suite classification and golden-output comparison
//! - `infra` - Infrastructure services like command execution and file system helpers
//! - `reporting` - Console reporting of notices, tallies and diffs
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、套件结果分类和黄金输出对比
//! - `infra` - 基础设施服务，如命令执行和文件系统辅助功能
//! - `reporting` - 控制台输出：通知、统计和差异
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::compare;
pub use core::models;
pub use core::suite;

/// Detects the locale to use for console messages from the system settings.
///
/// It attempts to match the full locale (e.g., "zh-CN") against the shipped
/// message catalogs, then just the language code (e.g., "en" from "en-US"),
/// and finally falls back to "en". Used by the CLI whenever no `--lang`
/// argument is given.
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
            .to_string()
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
