//! # 数据模型模块
//!
//! 定义重命名策略、候选项、结果和文件类别。
//!
//! ## 依赖关系
//! - 被 `cleaner/`, `batch/` 和 `commands/` 使用
//! - 子模块: policy, candidate, category

pub mod candidate;
pub mod category;
pub mod policy;

pub use candidate::{RenameCandidate, RenameOutcome};
pub use category::{describe_file_type, FileCategory};
pub use policy::RenamePolicy;
