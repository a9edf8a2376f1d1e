//! # 批量执行器
//!
//! 顺序地把已批准的候选项交给 rename sink。
//!
//! ## 功能
//! - 每个候选项恰好调用一次 sink，不重试
//! - 单项失败记入结果，不中断后续处理
//! - 可选进度条显示
//!
//! ## 依赖关系
//! - 被 `batch/session.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::models::{RenameCandidate, RenameOutcome};
use crate::tree::RenameSink;
use crate::utils::progress;

use indicatif::ProgressBar;

/// 批量执行器
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// 依次应用候选项
    pub fn run<E, K>(&self, candidates: Vec<RenameCandidate<E>>, sink: &mut K) -> RenameOutcome<E>
    where
        K: RenameSink<E> + ?Sized,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(candidates.len() as u64, "Renaming")
        } else {
            ProgressBar::hidden()
        };

        let mut outcome = RenameOutcome::default();

        for candidate in candidates {
            let result = sink
                .rename(&candidate.entity, &candidate.proposed_name)
                .map_err(|e| e.to_string());
            outcome.record(candidate, result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        outcome
    }
}

/// 不带进度条地应用候选项
pub fn apply<E, K>(candidates: Vec<RenameCandidate<E>>, sink: &mut K) -> RenameOutcome<E>
where
    K: RenameSink<E> + ?Sized,
{
    BatchRunner::default().run(candidates, sink)
}
