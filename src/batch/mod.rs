//! # 批量重命名模块
//!
//! 扫描外部文件树、逐项审核、整批确认并应用重命名。
//!
//! ## 功能
//! - 按类别/模式过滤叶子实体
//! - 深度优先扫描，单个子树出错不影响其余部分
//! - 逐项审核与整批确认
//! - 部分失败语义：每一项都会尝试，结果汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `tree/`, `cleaner/`, `models/`
//! - 使用 `indicatif` 显示进度

pub mod filter;
pub mod report;
pub mod review;
pub mod runner;
pub mod scanner;
pub mod session;

pub use filter::IncludeFilter;
pub use review::{AcceptAll, Approver, Choice};
pub use scanner::{ScanReport, Scanner};
pub use session::{RenameSession, SessionEnd};
