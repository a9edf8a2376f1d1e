//! # 包含过滤器
//!
//! 决定哪些叶子实体参与清洗：按文件类别，可选再按文件名 glob 过滤。
//!
//! ## 依赖关系
//! - 被 `batch/scanner.rs` 使用
//! - 使用 `models/category.rs`
//! - 使用 `glob` 匹配文件名

use crate::error::{Result, TidynameError};
use crate::models::FileCategory;

use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;

/// 默认启用的类别（不含 `other`）
pub const DEFAULT_CATEGORIES: [FileCategory; 4] = [
    FileCategory::Design,
    FileCategory::Drawing,
    FileCategory::Simulation,
    FileCategory::Cad,
];

/// 包含过滤器
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    /// 启用的类别
    categories: BTreeSet<FileCategory>,
    /// 文件名匹配模式（为空表示不限）
    patterns: Vec<Pattern>,
}

impl Default for IncludeFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl IncludeFilter {
    /// 按类别创建过滤器
    pub fn new(categories: impl IntoIterator<Item = FileCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            patterns: Vec::new(),
        }
    }

    /// 启用全部类别
    pub fn all() -> Self {
        Self::new(FileCategory::ALL)
    }

    /// 设置文件名匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    TidynameError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 判断实体是否参与清洗
    pub fn includes(&self, name: &str, extension: &str) -> bool {
        let category_ok = self
            .categories
            .iter()
            .any(|category| category.matches(name, extension));

        category_ok && self.matches_patterns(name)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        self.patterns
            .iter()
            .any(|p| p.matches_with(name, options))
    }
}
