//! # 内存文件树（测试用）
//!
//! 可构造任意层级、可指定某个目录或文件读取失败，用于驱动层测试。
//! 根目录（下标 0）是树的顶层，`parent` 在这里返回 `None`。

use super::{FileTreeSource, FolderListing, RenameSink};
use crate::error::{Result, TidynameError};

use std::collections::HashSet;

struct MemFolder {
    name: String,
    parent: Option<usize>,
    files: Vec<usize>,
    folders: Vec<usize>,
    broken: bool,
}

struct MemFile {
    name: String,
    broken: bool,
}

/// 内存目录树，目录和文件都用下标表示
pub struct MemoryTree {
    folders: Vec<MemFolder>,
    files: Vec<MemFile>,
}

impl MemoryTree {
    /// 创建只含根目录的树，根目录下标为 0
    pub fn new(root_name: &str) -> Self {
        MemoryTree {
            folders: vec![MemFolder {
                name: root_name.to_string(),
                parent: None,
                files: Vec::new(),
                folders: Vec::new(),
                broken: false,
            }],
            files: Vec::new(),
        }
    }

    pub fn add_folder(&mut self, parent: usize, name: &str) -> usize {
        let id = self.folders.len();
        self.folders.push(MemFolder {
            name: name.to_string(),
            parent: Some(parent),
            files: Vec::new(),
            folders: Vec::new(),
            broken: false,
        });
        self.folders[parent].folders.push(id);
        id
    }

    pub fn add_file(&mut self, folder: usize, name: &str) -> usize {
        let id = self.files.len();
        self.files.push(MemFile {
            name: name.to_string(),
            broken: false,
        });
        self.folders[folder].files.push(id);
        id
    }

    /// 让目录在列举时失败
    pub fn break_folder(&mut self, folder: usize) {
        self.folders[folder].broken = true;
    }

    /// 让文件在读取名称时失败
    pub fn break_file(&mut self, file: usize) {
        self.files[file].broken = true;
    }

    fn file(&self, entity: usize) -> Result<&MemFile> {
        let f = &self.files[entity];
        if f.broken {
            return Err(TidynameError::ScanError {
                path: f.name.clone(),
                reason: "file is unreadable".to_string(),
            });
        }
        Ok(f)
    }
}

impl FileTreeSource for MemoryTree {
    type Folder = usize;
    type Entity = usize;

    fn children(&self, folder: &usize) -> Result<FolderListing<usize, usize>> {
        let f = &self.folders[*folder];
        if f.broken {
            return Err(TidynameError::ScanError {
                path: f.name.clone(),
                reason: "permission denied".to_string(),
            });
        }
        Ok(FolderListing {
            entities: f.files.clone(),
            folders: f.folders.clone(),
        })
    }

    fn folder_name(&self, folder: &usize) -> Result<String> {
        Ok(self.folders[*folder].name.clone())
    }

    fn entity_name(&self, entity: &usize) -> Result<String> {
        Ok(self.file(*entity)?.name.clone())
    }

    fn parent(&self, folder: &usize) -> Option<usize> {
        self.folders[*folder].parent
    }

    fn extension(&self, entity: &usize) -> Result<String> {
        let name = &self.file(*entity)?.name;
        Ok(name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default())
    }
}

/// 记录调用的 sink，可让指定实体失败
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<(usize, String)>,
    pub failing: HashSet<usize>,
}

impl RecordingSink {
    pub fn failing_on(ids: &[usize]) -> Self {
        RecordingSink {
            calls: Vec::new(),
            failing: ids.iter().copied().collect(),
        }
    }
}

impl RenameSink<usize> for RecordingSink {
    fn rename(&mut self, entity: &usize, new_name: &str) -> Result<()> {
        self.calls.push((*entity, new_name.to_string()));
        if self.failing.contains(entity) {
            return Err(TidynameError::Other("file is locked".to_string()));
        }
        Ok(())
    }
}
