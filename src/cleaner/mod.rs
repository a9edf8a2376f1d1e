//! # 文件名清洗模块
//!
//! 将任意用户输入的文件/组件名转换为适合文件系统和云存储的名称。
//!
//! ## 功能
//! - 纯函数清洗管线（大小写、空白、特殊字符、Unicode、标记折叠）
//! - 问题字符诊断与名称校验（仅用于展示）
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 使用 `models/policy.rs`
//! - 子模块: pipeline, diagnostics

pub mod diagnostics;
pub mod pipeline;

pub use diagnostics::{
    describe_changes, describe_problems, has_problems, highlight, list_problem_chars, validate,
};
pub use pipeline::clean;
