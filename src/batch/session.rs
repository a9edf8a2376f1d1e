//! # 重命名会话
//!
//! 一次完整的 扫描 -> 审核 -> 确认 -> 应用 流程，状态依次为：
//! `Scanning -> Reviewing -> Confirming -> Applying -> Done`。
//! 新建的会话处于 `Idle`，即开始扫描之前的状态。
//!
//! 审核中选择全部取消会直接进入 `Done`，已接受的候选项也不会应用；
//! 整批确认被拒绝同样直接进入 `Done`。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `batch/scanner.rs`, `batch/review.rs`, `batch/runner.rs`, `batch/report.rs`

use super::report;
use super::review::{self, Approver, ReviewDecision};
use super::runner::BatchRunner;
use super::scanner::{ScanReport, Scanner};
use crate::models::RenameOutcome;
use crate::tree::{FileTreeSource, RenameSink};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// 尚未开始扫描，不计入 `history`
    Idle,
    Scanning,
    Reviewing,
    Confirming,
    Applying,
    Done,
}

/// 会话结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// 没有需要重命名的文件
    NothingToRename,
    /// 审核中全部取消
    Cancelled,
    /// 所有候选项都被跳过
    NothingSelected,
    /// 整批确认被拒绝
    Declined,
    /// 已应用
    Applied,
}

/// 会话结果
#[derive(Debug)]
pub struct SessionReport<E> {
    pub end: SessionEnd,
    /// 审核中跳过的数量
    pub skipped: usize,
    /// 应用结果（未应用时为空）
    pub outcome: RenameOutcome<E>,
}

impl<E> SessionReport<E> {
    /// 给用户看的结果文本
    pub fn message(&self) -> String {
        match self.end {
            SessionEnd::NothingToRename => {
                "No files with special characters found in the selected scope.".to_string()
            }
            SessionEnd::Cancelled | SessionEnd::Declined => {
                "Rename operation cancelled".to_string()
            }
            SessionEnd::NothingSelected => "No files selected for renaming".to_string(),
            SessionEnd::Applied => report::summarize(&self.outcome, self.skipped),
        }
    }
}

/// 重命名会话
pub struct RenameSession<'a, A: ?Sized, K: ?Sized> {
    approver: &'a mut A,
    sink: &'a mut K,
    runner: BatchRunner,
    state: SessionState,
    history: Vec<SessionState>,
}

impl<'a, A: Approver + ?Sized, K: ?Sized> RenameSession<'a, A, K> {
    pub fn new(approver: &'a mut A, sink: &'a mut K) -> Self {
        Self {
            approver,
            sink,
            runner: BatchRunner::default(),
            state: SessionState::Idle,
            history: Vec::new(),
        }
    }

    /// 应用阶段是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.runner = BatchRunner::new(show);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 经过的全部状态
    pub fn history(&self) -> &[SessionState] {
        &self.history
    }

    fn enter(&mut self, next: SessionState) {
        self.state = next;
        self.history.push(next);
    }

    /// 扫描阶段
    pub fn scan<S: FileTreeSource>(
        &mut self,
        scanner: &Scanner<'_, S>,
        roots: &[S::Folder],
    ) -> ScanReport<S::Entity> {
        self.enter(SessionState::Scanning);
        scanner.scan_all(roots)
    }

    /// 审核、确认并应用扫描结果
    pub fn finish<E>(&mut self, scan: ScanReport<E>) -> SessionReport<E>
    where
        K: RenameSink<E>,
    {
        let mut report = SessionReport {
            end: SessionEnd::NothingToRename,
            skipped: 0,
            outcome: RenameOutcome::default(),
        };

        if scan.candidates.is_empty() {
            self.enter(SessionState::Done);
            return report;
        }

        self.enter(SessionState::Reviewing);
        let (accepted, skipped) = match review::review(scan.candidates, &mut *self.approver) {
            ReviewDecision::Finished { accepted, skipped } => (accepted, skipped),
            ReviewDecision::Cancelled => {
                report.end = SessionEnd::Cancelled;
                self.enter(SessionState::Done);
                return report;
            }
        };
        report.skipped = skipped;

        if accepted.is_empty() {
            report.end = SessionEnd::NothingSelected;
            self.enter(SessionState::Done);
            return report;
        }

        self.enter(SessionState::Confirming);
        let prompt = review::confirm_prompt(accepted.len(), skipped);
        if !self.approver.ask_yes_no(&prompt) {
            report.end = SessionEnd::Declined;
            self.enter(SessionState::Done);
            return report;
        }

        self.enter(SessionState::Applying);
        report.outcome = self.runner.run(accepted, &mut *self.sink);
        report.end = SessionEnd::Applied;
        self.enter(SessionState::Done);
        report
    }

    /// 完整流程
    pub fn run<S: FileTreeSource>(
        &mut self,
        scanner: &Scanner<'_, S>,
        roots: &[S::Folder],
    ) -> SessionReport<S::Entity>
    where
        K: RenameSink<S::Entity>,
    {
        let scan = self.scan(scanner, roots);
        self.finish(scan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::filter::IncludeFilter;
    use crate::batch::review::tests::ScriptedApprover;
    use crate::batch::review::{AcceptAll, Choice};
    use crate::models::RenamePolicy;
    use crate::tree::memory::{MemoryTree, RecordingSink};

    fn sample_tree() -> MemoryTree {
        let mut tree = MemoryTree::new("Root");
        let sub = tree.add_folder(0, "Sub");
        tree.add_file(0, "first file.f3d");
        tree.add_file(0, "second file.f3d");
        tree.add_file(sub, "third file.f3d");
        tree
    }

    #[test]
    fn test_accept_all_applies_everything() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver = AcceptAll;
        let mut sink = RecordingSink::default();

        let mut session = RenameSession::new(&mut approver, &mut sink);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.history().is_empty());
        let report = session.run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::Applied);
        assert_eq!(report.outcome.succeeded.len(), 3);
        assert_eq!(
            session.history(),
            &[
                SessionState::Scanning,
                SessionState::Reviewing,
                SessionState::Confirming,
                SessionState::Applying,
                SessionState::Done
            ]
        );
        assert_eq!(report.message(), "Successfully renamed 3 of 3 files");
        assert_eq!(sink.calls[2], (2, "third_file.f3d".to_string()));
    }

    #[test]
    fn test_cancel_applies_nothing() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver = ScriptedApprover::new(&[Choice::Yes, Choice::Cancel], true);
        let mut sink = RecordingSink::default();

        let mut session = RenameSession::new(&mut approver, &mut sink);
        let report = session.run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::Cancelled);
        assert_eq!(session.state(), SessionState::Done);
        assert!(!session.history().contains(&SessionState::Confirming));
        assert_eq!(report.outcome.attempted(), 0);
        assert!(sink.calls.is_empty());
        assert_eq!(approver.prompts.len(), 2);
        assert!(approver.confirmations.is_empty());
    }

    #[test]
    fn test_declined_confirmation_applies_nothing() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver =
            ScriptedApprover::new(&[Choice::Yes, Choice::No, Choice::Yes], false);
        let mut sink = RecordingSink::default();

        let report = RenameSession::new(&mut approver, &mut sink).run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::Declined);
        assert_eq!(report.message(), "Rename operation cancelled");
        assert!(sink.calls.is_empty());
        assert_eq!(
            approver.confirmations,
            vec!["Ready to rename 2 files (skipped 1)\n\nProceed with batch rename?"]
        );
    }

    #[test]
    fn test_skipped_items_are_not_applied() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver =
            ScriptedApprover::new(&[Choice::No, Choice::Yes, Choice::No], true);
        let mut sink = RecordingSink::failing_on(&[]);

        let report = RenameSession::new(&mut approver, &mut sink).run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::Applied);
        assert_eq!(report.skipped, 2);
        assert_eq!(sink.calls, vec![(1, "second_file.f3d".to_string())]);
        assert_eq!(
            report.message(),
            "Successfully renamed 1 of 1 files\nSkipped 2 files"
        );
    }

    #[test]
    fn test_all_skipped() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver = ScriptedApprover::new(&[Choice::No, Choice::No, Choice::No], true);
        let mut sink = RecordingSink::default();

        let report = RenameSession::new(&mut approver, &mut sink).run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::NothingSelected);
        assert!(approver.confirmations.is_empty());
    }

    #[test]
    fn test_nothing_to_rename() {
        let mut tree = MemoryTree::new("Root");
        tree.add_file(0, "clean_name.f3d");
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver = ScriptedApprover::new(&[], true);
        let mut sink = RecordingSink::default();

        let mut session = RenameSession::new(&mut approver, &mut sink);
        let report = session.run(&scanner, &[0]);

        assert_eq!(report.end, SessionEnd::NothingToRename);
        assert_eq!(
            session.history(),
            &[SessionState::Scanning, SessionState::Done]
        );
        assert!(approver.prompts.is_empty());
    }

    #[test]
    fn test_failures_reported_with_partial_apply() {
        let tree = sample_tree();
        let policy = RenamePolicy::default();
        let filter = IncludeFilter::all();
        let scanner = Scanner::new(&tree, &policy, &filter);
        let mut approver = AcceptAll;
        let mut sink = RecordingSink::failing_on(&[1]);

        let report = RenameSession::new(&mut approver, &mut sink).run(&scanner, &[0]);

        assert_eq!(report.outcome.succeeded.len(), 2);
        assert_eq!(report.outcome.failed.len(), 1);
        assert_eq!(
            report.message(),
            "Successfully renamed 2 of 3 files\n\nFailed to rename 1 files:\n- second file.f3d: file is locked"
        );
    }
}
