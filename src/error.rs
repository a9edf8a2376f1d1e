//! # 统一错误处理模块
//!
//! 定义 Tidyname 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 扫描错误：单个目录/文件读取失败，局部吞掉并跳过该子树
//! - 重命名错误：rename sink 对单个候选项失败，记入结果并继续
//! - 配置错误：替换标记、参数不合法
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Tidyname 统一错误类型
#[derive(Error, Debug)]
pub enum TidynameError {
    // ─────────────────────────────────────────────────────────────
    // 扫描错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read '{path}': {reason}")]
    ScanError { path: String, reason: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to rename '{path}': {source}")]
    RenameError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Target already exists: {path}")]
    TargetExists { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid replacement token '{token}': {reason}")]
    InvalidReplacementToken { token: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TidynameError>;
