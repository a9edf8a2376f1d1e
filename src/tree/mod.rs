//! # 文件树抽象
//!
//! 批量重命名驱动只通过两个窄接口访问宿主环境：
//! - `FileTreeSource`：按目录列出叶子实体与子目录
//! - `RenameSink`：对单个实体应用新名称
//!
//! ## 依赖关系
//! - 被 `batch/` 使用
//! - 子模块: fs（本地文件系统实现）, memory（测试用内存树）

pub mod fs;
#[cfg(test)]
pub mod memory;

pub use fs::{FsRenameSink, FsTree};

use crate::error::Result;

/// 单个目录的直接内容
#[derive(Debug, Clone)]
pub struct FolderListing<F, E> {
    /// 叶子实体（按来源给出的顺序）
    pub entities: Vec<E>,
    /// 子目录（按来源给出的顺序）
    pub folders: Vec<F>,
}

impl<F, E> Default for FolderListing<F, E> {
    fn default() -> Self {
        FolderListing {
            entities: Vec::new(),
            folders: Vec::new(),
        }
    }
}

/// 可遍历的外部文件树
///
/// 核心逻辑从不直接修改这棵树。
pub trait FileTreeSource {
    type Folder;
    type Entity;

    /// 列出目录的直接内容
    fn children(&self, folder: &Self::Folder) -> Result<FolderListing<Self::Folder, Self::Entity>>;

    /// 目录名称
    fn folder_name(&self, folder: &Self::Folder) -> Result<String>;

    /// 叶子实体名称
    fn entity_name(&self, entity: &Self::Entity) -> Result<String>;

    /// 父目录，到达树的顶层时返回 `None`
    ///
    /// 文件系统实现把每个扫描根当作顶层。
    fn parent(&self, folder: &Self::Folder) -> Option<Self::Folder>;

    /// 叶子实体扩展名（不带点，可能为空）
    fn extension(&self, entity: &Self::Entity) -> Result<String>;
}

/// 重命名接收端
///
/// 每个候选项恰好调用一次，不做重试。
pub trait RenameSink<E> {
    fn rename(&mut self, entity: &E, new_name: &str) -> Result<()>;
}
