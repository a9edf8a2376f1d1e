//! # 重命名候选项与结果
//!
//! 一次扫描产生的候选项，以及应用后的汇总结果。
//!
//! ## 依赖关系
//! - 被 `batch/` 使用
//! - 被 `commands/rename.rs` 使用

use serde::Serialize;

/// 单个重命名候选项
///
/// `entity` 是外部实体的不透明句柄，只能通过 rename sink 修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCandidate<E> {
    /// 原始名称
    pub original_name: String,
    /// 建议的新名称
    pub proposed_name: String,
    /// 可读的位置路径，如 `Root > Sub > Leaf`
    pub location_path: String,
    /// 外部实体句柄
    pub entity: E,
    /// 类型描述，如 `Fusion 360 Design`
    pub category: String,
}

/// CSV 导出行
#[derive(Debug, Serialize)]
pub struct PlanRecord<'a> {
    pub location: &'a str,
    pub original: &'a str,
    pub proposed: &'a str,
    pub category: &'a str,
}

impl<E> RenameCandidate<E> {
    pub fn to_record(&self) -> PlanRecord<'_> {
        PlanRecord {
            location: &self.location_path,
            original: &self.original_name,
            proposed: &self.proposed_name,
            category: &self.category,
        }
    }
}

/// 批量重命名结果
///
/// 不变式：`succeeded.len() + failed.len() == attempted()`
#[derive(Debug)]
pub struct RenameOutcome<E> {
    /// 成功项（保持原顺序）
    pub succeeded: Vec<RenameCandidate<E>>,
    /// 失败项与原因（保持原顺序）
    pub failed: Vec<(RenameCandidate<E>, String)>,
}

impl<E> Default for RenameOutcome<E> {
    fn default() -> Self {
        RenameOutcome {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<E> RenameOutcome<E> {
    /// 合并单项处理结果
    pub fn record(&mut self, candidate: RenameCandidate<E>, result: Result<(), String>) {
        match result {
            Ok(()) => self.succeeded.push(candidate),
            Err(reason) => self.failed.push((candidate, reason)),
        }
    }

    /// 总尝试数量
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}
