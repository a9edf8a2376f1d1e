//! # 逐项审核
//!
//! 把候选项逐个交给审批方：接受、跳过或全部取消。
//! 审批方是同步调用，返回前驱动一直阻塞。
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 使用
//! - 被 `utils/prompt.rs` 实现（终端交互）
//! - 使用 `cleaner/diagnostics.rs` 生成提示文本

use crate::cleaner;
use crate::models::RenameCandidate;

/// 三选一的回答
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Cancel,
}

/// 人工审批方
pub trait Approver {
    /// 单个候选项：接受 / 跳过 / 全部取消
    fn ask_yes_no_cancel(&mut self, prompt: &str) -> Choice;

    /// 整批确认
    fn ask_yes_no(&mut self, prompt: &str) -> bool;
}

/// 非交互模式：全部接受
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl Approver for AcceptAll {
    fn ask_yes_no_cancel(&mut self, _prompt: &str) -> Choice {
        Choice::Yes
    }

    fn ask_yes_no(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// 审核结论
#[derive(Debug)]
pub enum ReviewDecision<E> {
    /// 审核完成
    Finished {
        accepted: Vec<RenameCandidate<E>>,
        skipped: usize,
    },
    /// 中途全部取消，已接受的也不应用
    Cancelled,
}

/// 逐项审核候选项
pub fn review<E, A: Approver + ?Sized>(
    candidates: Vec<RenameCandidate<E>>,
    approver: &mut A,
) -> ReviewDecision<E> {
    let total = candidates.len();
    let mut accepted = Vec::new();
    let mut skipped = 0;

    for (i, candidate) in candidates.into_iter().enumerate() {
        let prompt = review_prompt(&candidate, i + 1, total);
        match approver.ask_yes_no_cancel(&prompt) {
            Choice::Yes => accepted.push(candidate),
            Choice::No => skipped += 1,
            Choice::Cancel => return ReviewDecision::Cancelled,
        }
    }

    ReviewDecision::Finished { accepted, skipped }
}

/// 单个候选项的提示文本
pub fn review_prompt<E>(candidate: &RenameCandidate<E>, index: usize, total: usize) -> String {
    let problems = cleaner::describe_problems(&candidate.original_name);

    format!(
        "Type: {}\nLocation: {}\n\nCurrent name: {}\nNew name: {}\n\nProblems found: {}\n\nRename this file?\n\n(File {} of {})",
        candidate.category,
        candidate.location_path,
        cleaner::highlight(&candidate.original_name),
        candidate.proposed_name,
        problems.join(", "),
        index,
        total
    )
}

/// 整批确认的提示文本
pub fn confirm_prompt(accepted: usize, skipped: usize) -> String {
    let mut msg = format!("Ready to rename {} files", accepted);
    if skipped > 0 {
        msg.push_str(&format!(" (skipped {})", skipped));
    }
    msg.push_str("\n\nProceed with batch rename?");
    msg
}
