//! # check 命令实现
//!
//! 校验名称并以表格列出问题与清洗建议。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `cleaner/`
//! - 使用 `utils/output.rs`

use crate::cleaner;
use crate::cli::check::CheckArgs;
use crate::error::{Result, TidynameError};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 校验结果行
#[derive(Debug, Clone, Tabled)]
struct CheckRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Valid")]
    valid: String,
    #[tabled(rename = "Issues")]
    issues: String,
    #[tabled(rename = "Suggested")]
    suggested: String,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking Names");

    let policy = args.policy.to_policy()?;
    let mut invalid = 0;

    let rows: Vec<CheckRow> = args
        .names
        .iter()
        .map(|name| {
            let validation = cleaner::validate(name);
            if !validation.is_valid {
                invalid += 1;
            }
            CheckRow {
                name: name.clone(),
                valid: (if validation.is_valid { "yes" } else { "no" }).to_string(),
                issues: validation.issues.join("; "),
                suggested: cleaner::clean(name, &policy),
            }
        })
        .collect();

    println!("{}", Table::new(&rows));

    if invalid == 0 {
        output::print_success(&format!("All {} names are valid", rows.len()));
        return Ok(());
    }

    output::print_warning(&format!("{} of {} names have issues", invalid, rows.len()));
    if args.strict {
        return Err(TidynameError::InvalidArgument(format!(
            "{} invalid name(s)",
            invalid
        )));
    }

    Ok(())
}
