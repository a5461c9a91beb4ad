//! # File System Helpers Module / 文件系统辅助模块
//!
//! Path resolution for the harness: fixture locations, the sibling
//! `examples` directory holding target programs, and absolute-path helpers.
//!
//! 本工具的路径解析：基准文件位置、存放目标程序的同级
//! `examples` 目录，以及绝对路径辅助功能。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}

/// The `examples` directory sibling to `base`, i.e. `<base>/../examples`.
/// Target programs and the suite's build targets live there.
pub fn sibling_examples_dir(base: &Path) -> PathBuf {
    base.join("..").join("examples")
}

/// Path of the golden fixture for a given case name: `<name>.out`,
/// relative to the current directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.out"))
}

/// Reads a fixture file as text, with the path attached to any error.
pub fn read_fixture(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read fixture: {}", path.display()))
}
