//! # clean 子命令 CLI 定义
//!
//! 清洗命令行给出的名称并输出结果
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/clean.rs`

use super::policy::PolicyArgs;
use clap::Args;

/// clean 子命令参数
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Names to clean
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Print only the cleaned names, one per line
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}
