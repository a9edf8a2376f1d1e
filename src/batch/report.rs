//! # 结果汇总
//!
//! 生成给用户看的汇总文本。失败项最多列出前 5 个，其余只给数量。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs`, `commands/rename.rs` 使用

use crate::models::RenameOutcome;

/// 汇总中最多列出的失败项数量
pub const MAX_LISTED_FAILURES: usize = 5;

/// 生成汇总文本
pub fn summarize<E>(outcome: &RenameOutcome<E>, skipped: usize) -> String {
    let mut msg = format!(
        "Successfully renamed {} of {} files",
        outcome.succeeded.len(),
        outcome.attempted()
    );

    if skipped > 0 {
        msg.push_str(&format!("\nSkipped {} files", skipped));
    }

    if !outcome.failed.is_empty() {
        msg.push_str(&format!(
            "\n\nFailed to rename {} files:",
            outcome.failed.len()
        ));
        for (candidate, reason) in outcome.failed.iter().take(MAX_LISTED_FAILURES) {
            msg.push_str(&format!("\n- {}: {}", candidate.original_name, reason));
        }
        if outcome.failed.len() > MAX_LISTED_FAILURES {
            msg.push_str(&format!(
                "\n... and {} more",
                outcome.failed.len() - MAX_LISTED_FAILURES
            ));
        }
    }

    msg
}
