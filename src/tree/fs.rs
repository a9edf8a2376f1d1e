//! # 本地文件系统实现
//!
//! 用 `walkdir` 逐层列目录，实现 `FileTreeSource` 和 `RenameSink`。
//! 同一目录下的条目按文件名排序，保证扫描顺序确定。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `walkdir` 遍历目录

use super::{FileTreeSource, FolderListing, RenameSink};
use crate::error::{Result, TidynameError};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 以若干扫描根为边界的本地目录树
pub struct FsTree {
    roots: Vec<PathBuf>,
}

impl FsTree {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

fn lossy_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().to_string())
}

impl FileTreeSource for FsTree {
    type Folder = PathBuf;
    type Entity = PathBuf;

    fn children(&self, folder: &PathBuf) -> Result<FolderListing<PathBuf, PathBuf>> {
        let mut listing = FolderListing::default();

        let walker = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                // 目录本身不可读则整个子树失败，单个条目出错只跳过该条目
                Err(e) if e.depth() == 0 || e.path() == Some(folder.as_path()) => {
                    return Err(TidynameError::ScanError {
                        path: folder.display().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(_) => continue,
            };

            let file_type = entry.file_type();
            if file_type.is_file() {
                listing.entities.push(entry.into_path());
            } else if file_type.is_dir() {
                listing.folders.push(entry.into_path());
            }
        }

        Ok(listing)
    }

    fn folder_name(&self, folder: &PathBuf) -> Result<String> {
        Ok(lossy_name(folder).unwrap_or_else(|| folder.display().to_string()))
    }

    fn entity_name(&self, entity: &PathBuf) -> Result<String> {
        lossy_name(entity).ok_or_else(|| TidynameError::ScanError {
            path: entity.display().to_string(),
            reason: "path has no file name".to_string(),
        })
    }

    fn parent(&self, folder: &PathBuf) -> Option<PathBuf> {
        if self.roots.iter().any(|r| r == folder) {
            return None;
        }
        folder.parent().map(Path::to_path_buf)
    }

    fn extension(&self, entity: &PathBuf) -> Result<String> {
        Ok(entity
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default())
    }
}

/// 在原目录内重命名文件
#[derive(Debug, Default)]
pub struct FsRenameSink;

impl RenameSink<PathBuf> for FsRenameSink {
    fn rename(&mut self, entity: &PathBuf, new_name: &str) -> Result<()> {
        let target = entity.with_file_name(new_name);

        // 仅大小写不同的改名在不区分大小写的文件系统上会"撞上"自己
        let case_only = lossy_name(entity)
            .map(|old| old.to_lowercase() == new_name.to_lowercase())
            .unwrap_or(false);

        if target.exists() && !case_only {
            return Err(TidynameError::TargetExists {
                path: target.display().to_string(),
            });
        }

        fs::rename(entity, &target).map_err(|e| TidynameError::RenameError {
            path: entity.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_children_sorted_files_and_folders() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        touch(&root.join("b file.step"));
        touch(&root.join("a file.f3d"));
        fs::create_dir(root.join("sub B")).unwrap();
        fs::create_dir(root.join("sub A")).unwrap();

        let tree = FsTree::new(vec![root.clone()]);
        let listing = tree.children(&root).unwrap();

        let files: Vec<String> = listing
            .entities
            .iter()
            .map(|p| tree.entity_name(p).unwrap())
            .collect();
        let folders: Vec<String> = listing
            .folders
            .iter()
            .map(|p| tree.folder_name(p).unwrap())
            .collect();

        assert_eq!(files, vec!["a file.f3d", "b file.step"]);
        assert_eq!(folders, vec!["sub A", "sub B"]);
    }

    #[test]
    fn test_children_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let tree = FsTree::new(vec![missing.clone()]);
        assert!(tree.children(&missing).is_err());
    }

    #[test]
    fn test_parent_stops_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        let sub = root.join("sub");
        let tree = FsTree::new(vec![root.clone()]);

        assert_eq!(tree.parent(&sub), Some(root.clone()));
        assert_eq!(tree.parent(&root), None);
    }

    #[test]
    fn test_extension_lowercase_without_dot() {
        let tree = FsTree::new(vec![]);
        assert_eq!(tree.extension(&PathBuf::from("a/Part.STEP")).unwrap(), "step");
        assert_eq!(tree.extension(&PathBuf::from("a/README")).unwrap(), "");
    }

    #[test]
    fn test_rename_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("My File.step");
        touch(&src);

        let mut sink = FsRenameSink;
        sink.rename(&src, "My_File.step").unwrap();

        assert!(!src.exists());
        assert!(dir.path().join("My_File.step").exists());
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a b.txt");
        touch(&src);
        touch(&dir.path().join("a_b.txt"));

        let mut sink = FsRenameSink;
        let err = sink.rename(&src, "a_b.txt").unwrap_err();

        assert!(matches!(err, TidynameError::TargetExists { .. }));
        assert!(src.exists());
    }
}
