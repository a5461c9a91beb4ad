//! # Core Module / 核心模块
//!
//! This module contains the data models and the pure decision logic of the
//! harness: suite outcome classification and golden-output comparison.
//!
//! 此模块包含本工具的数据模型和纯决策逻辑：
//! 套件结果分类和黄金输出对比。

pub mod compare;
pub mod models;
pub mod suite;
