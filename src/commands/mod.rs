//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `cleaner/`, `batch/`, `tree/`, `utils/`
//! - 子模块: clean, check, rename

pub mod check;
pub mod clean;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Clean(args) => clean::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Rename(args) => rename::execute(args),
    }
}
