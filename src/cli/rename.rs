//! # rename 子命令 CLI 定义
//!
//! 扫描一个或多个目录树，审核并重命名名称有问题的文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use super::policy::PolicyArgs;
use crate::models::FileCategory;

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Root directories to scan (each is scanned depth-first)
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// File categories to include
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "design,drawing,simulation,cad"
    )]
    pub include: Vec<FileCategory>,

    /// Include every file category
    #[arg(long, default_value_t = false, conflicts_with = "include")]
    pub all: bool,

    /// Glob patterns for file names (comma separated)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Only scan the files directly inside each root
    #[arg(long, default_value_t = false)]
    pub shallow: bool,

    /// Show the rename plan without touching any file
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Write the rename plan to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Accept every rename without prompting
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}
