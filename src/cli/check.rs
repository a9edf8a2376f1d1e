//! # check 子命令 CLI 定义
//!
//! 校验名称，列出问题字符、超长和保留名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::policy::PolicyArgs;
use clap::Args;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Names to validate
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Exit with an error if any name is invalid
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,
}
