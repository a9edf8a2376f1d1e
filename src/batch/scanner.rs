//! # 扫描器
//!
//! 深度优先遍历外部文件树，对每个叶子实体先过滤再清洗，
//! 只有新名称与原名不同时才产生候选项。
//!
//! ## 功能
//! - 先访问当前目录的全部叶子实体，再依次进入子目录
//! - 单个目录或文件读取失败时记录错误并跳过，继续扫描兄弟节点
//! - 支持多个扫描根
//!
//! ## 依赖关系
//! - 被 `batch/session.rs`, `commands/rename.rs` 使用
//! - 使用 `tree/`, `cleaner/`, `batch/filter.rs`

use super::filter::IncludeFilter;
use crate::cleaner;
use crate::error::{Result, TidynameError};
use crate::models::{describe_file_type, RenameCandidate, RenamePolicy};
use crate::tree::FileTreeSource;

/// 位置路径分隔符
pub const PATH_SEPARATOR: &str = " > ";

/// 位置路径无法读取时的占位
pub const UNKNOWN_PATH: &str = "Unknown Path";

/// 扫描结果
#[derive(Debug)]
pub struct ScanReport<E> {
    /// 需要重命名的候选项（遍历顺序）
    pub candidates: Vec<RenameCandidate<E>>,
    /// 被吞掉的读取错误
    pub errors: Vec<TidynameError>,
    /// 检查过的叶子实体数量
    pub visited: usize,
}

impl<E> Default for ScanReport<E> {
    fn default() -> Self {
        ScanReport {
            candidates: Vec::new(),
            errors: Vec::new(),
            visited: 0,
        }
    }
}

/// 文件树扫描器
pub struct Scanner<'a, S: FileTreeSource> {
    source: &'a S,
    policy: &'a RenamePolicy,
    filter: &'a IncludeFilter,
    recursive: bool,
}

impl<'a, S: FileTreeSource> Scanner<'a, S> {
    pub fn new(source: &'a S, policy: &'a RenamePolicy, filter: &'a IncludeFilter) -> Self {
        Self {
            source,
            policy,
            filter,
            recursive: true,
        }
    }

    /// 设置是否进入子目录
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 扫描单个根目录
    pub fn scan(&self, root: &S::Folder) -> ScanReport<S::Entity> {
        let mut report = ScanReport::default();
        self.visit(root, &mut report);
        report
    }

    /// 依次扫描多个根目录
    pub fn scan_all(&self, roots: &[S::Folder]) -> ScanReport<S::Entity> {
        let mut report = ScanReport::default();
        for root in roots {
            self.visit(root, &mut report);
        }
        report
    }

    fn visit(&self, folder: &S::Folder, report: &mut ScanReport<S::Entity>) {
        let listing = match self.source.children(folder) {
            Ok(listing) => listing,
            Err(e) => {
                report.errors.push(e);
                return;
            }
        };

        let location = self.location_path(folder);

        for entity in listing.entities {
            report.visited += 1;
            match self.inspect(entity, &location) {
                Ok(Some(candidate)) => report.candidates.push(candidate),
                Ok(None) => {}
                Err(e) => report.errors.push(e),
            }
        }

        if self.recursive {
            for sub in &listing.folders {
                self.visit(sub, report);
            }
        }
    }

    /// 检查单个实体，需要改名时返回候选项
    fn inspect(
        &self,
        entity: S::Entity,
        location: &str,
    ) -> Result<Option<RenameCandidate<S::Entity>>> {
        let name = self.source.entity_name(&entity)?;
        let extension = self.source.extension(&entity)?;

        if !self.filter.includes(&name, &extension) {
            return Ok(None);
        }

        let proposed = cleaner::clean(&name, self.policy);
        if proposed == name {
            return Ok(None);
        }

        Ok(Some(RenameCandidate {
            original_name: name,
            proposed_name: proposed,
            location_path: location.to_string(),
            entity,
            category: describe_file_type(&extension),
        }))
    }

    /// 从树的顶层到该目录的名称路径，顶层由 `FileTreeSource::parent` 决定
    fn location_path(&self, folder: &S::Folder) -> String {
        let mut parts = match self.source.folder_name(folder) {
            Ok(name) => vec![name],
            Err(_) => return UNKNOWN_PATH.to_string(),
        };

        let mut current = self.source.parent(folder);
        while let Some(f) = current {
            match self.source.folder_name(&f) {
                Ok(name) => parts.push(name),
                Err(_) => return UNKNOWN_PATH.to_string(),
            }
            current = self.source.parent(&f);
        }

        parts.reverse();
        parts.join(PATH_SEPARATOR)
    }
}

/// 扫描整棵树，返回候选项与被跳过的错误
pub fn scan<S: FileTreeSource>(
    source: &S,
    root: &S::Folder,
    filter: &IncludeFilter,
    policy: &RenamePolicy,
) -> ScanReport<S::Entity> {
    Scanner::new(source, policy, filter).scan(root)
}
