//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `clean`: 清洗命令行给出的名称
//! - `check`: 校验名称并列出问题字符
//! - `rename`: 扫描目录树、审核并重命名
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: policy, clean, check, rename

pub mod check;
pub mod clean;
pub mod policy;
pub mod rename;

use clap::{Parser, Subcommand};

/// Tidyname - 文件名清洗工具
#[derive(Parser)]
#[command(name = "tidyname")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Clean file names for filesystems and cloud storage", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Print the cleaned form of the given names
    Clean(clean::CleanArgs),

    /// Validate names and list problematic characters
    Check(check::CheckArgs),

    /// Scan directory trees and rename files with problematic names
    Rename(rename::RenameArgs),
}
