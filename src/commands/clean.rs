//! # clean 命令实现
//!
//! 按策略清洗命令行给出的名称。
//!
//! ## 依赖关系
//! - 使用 `cli/clean.rs` 定义的参数
//! - 使用 `cleaner/`
//! - 使用 `utils/output.rs`

use crate::cleaner;
use crate::cli::clean::CleanArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 clean 命令
pub fn execute(args: CleanArgs) -> Result<()> {
    let policy = args.policy.to_policy()?;

    for name in &args.names {
        let cleaned = cleaner::clean(name, &policy);
        if args.plain {
            println!("{}", cleaned);
        } else if &cleaned == name {
            output::print_skip(&format!("{} (already clean)", name));
        } else {
            output::print_rename(name, &cleaned);
        }
    }

    Ok(())
}
