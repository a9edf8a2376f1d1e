//! # 重命名策略
//!
//! 描述一次清洗所使用的全部选项。构造后不可变，同样的 (名称, 策略)
//! 总是得到同样的输出。
//!
//! ## 依赖关系
//! - 被 `cleaner/`, `batch/` 使用
//! - 被 `cli/policy.rs` 构造

use crate::cleaner::pipeline::is_special;
use crate::error::{Result, TidynameError};

/// 替换标记的最大长度
pub const MAX_TOKEN_LEN: usize = 8;

/// 文件名清洗策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePolicy {
    replace_spaces: bool,
    replace_special_chars: bool,
    replace_unicode: bool,
    to_lowercase: bool,
    replacement_token: String,
    keep_extension: bool,
}

impl Default for RenamePolicy {
    fn default() -> Self {
        RenamePolicy {
            replace_spaces: true,
            replace_special_chars: true,
            replace_unicode: true,
            to_lowercase: false,
            replacement_token: "_".to_string(),
            keep_extension: true,
        }
    }
}

impl RenamePolicy {
    /// 所有替换开关关闭、标记为空的策略
    #[cfg(test)]
    pub fn passthrough() -> Self {
        RenamePolicy {
            replace_spaces: false,
            replace_special_chars: false,
            replace_unicode: false,
            to_lowercase: false,
            replacement_token: String::new(),
            keep_extension: true,
        }
    }

    pub fn with_replace_spaces(mut self, on: bool) -> Self {
        self.replace_spaces = on;
        self
    }

    pub fn with_replace_special_chars(mut self, on: bool) -> Self {
        self.replace_special_chars = on;
        self
    }

    pub fn with_replace_unicode(mut self, on: bool) -> Self {
        self.replace_unicode = on;
        self
    }

    pub fn with_lowercase(mut self, on: bool) -> Self {
        self.to_lowercase = on;
        self
    }

    pub fn with_keep_extension(mut self, on: bool) -> Self {
        self.keep_extension = on;
        self
    }

    /// 设置替换标记（空字符串表示直接删除）
    pub fn with_replacement_token(mut self, token: &str) -> Result<Self> {
        validate_token(token)?;
        self.replacement_token = token.to_string();
        Ok(self)
    }

    pub fn replace_spaces(&self) -> bool {
        self.replace_spaces
    }

    pub fn replace_special_chars(&self) -> bool {
        self.replace_special_chars
    }

    pub fn replace_unicode(&self) -> bool {
        self.replace_unicode
    }

    pub fn to_lowercase(&self) -> bool {
        self.to_lowercase
    }

    pub fn replacement_token(&self) -> &str {
        &self.replacement_token
    }

    pub fn keep_extension(&self) -> bool {
        self.keep_extension
    }
}

/// 校验替换标记
///
/// 标记只能由可打印 ASCII 组成，且不能含字母数字或禁用的特殊字符。
/// 字母数字标记会被折叠/裁剪步骤误伤正常字符；含特殊字符的标记会在
/// 再次清洗时被重新展开。两者都会破坏幂等。
fn validate_token(token: &str) -> Result<()> {
    let invalid = |reason: &str| TidynameError::InvalidReplacementToken {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    if token.chars().count() > MAX_TOKEN_LEN {
        return Err(invalid(&format!(
            "longer than {} characters",
            MAX_TOKEN_LEN
        )));
    }

    for c in token.chars() {
        if !c.is_ascii_graphic() {
            return Err(invalid("only printable, non-space ASCII is allowed"));
        }
        if c.is_ascii_alphanumeric() {
            return Err(invalid("letters and digits are not allowed"));
        }
        if c == '/' || c == '\\' {
            return Err(invalid("path separators are not allowed"));
        }
        if is_special(c) {
            return Err(invalid(&format!("'{}' is itself a forbidden character", c)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let p = RenamePolicy::default();
        assert!(p.replace_spaces());
        assert!(p.replace_special_chars());
        assert!(p.replace_unicode());
        assert!(!p.to_lowercase());
        assert_eq!(p.replacement_token(), "_");
        assert!(p.keep_extension());
    }

    #[test]
    fn test_token_validation() {
        assert!(RenamePolicy::default().with_replacement_token("").is_ok());
        assert!(RenamePolicy::default().with_replacement_token("-").is_ok());
        assert!(RenamePolicy::default().with_replacement_token("-_").is_ok());
        assert!(RenamePolicy::default().with_replacement_token("x").is_err());
        assert!(RenamePolicy::default().with_replacement_token("7").is_err());
        assert!(RenamePolicy::default().with_replacement_token(" ").is_err());
        assert!(RenamePolicy::default().with_replacement_token("/").is_err());
        assert!(RenamePolicy::default().with_replacement_token("é").is_err());
        assert!(RenamePolicy::default().with_replacement_token("-!").is_err());
        assert!(RenamePolicy::default().with_replacement_token("#").is_err());
        assert!(RenamePolicy::default().with_replacement_token("._").is_err());
        assert!(RenamePolicy::default().with_replacement_token("$").is_err());
        assert!(RenamePolicy::default()
            .with_replacement_token("---------")
            .is_err());
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        let p = RenamePolicy::default()
            .with_lowercase(true)
            .with_replacement_token("-")
            .unwrap();
        assert!(p.to_lowercase());
        assert!(p.replace_spaces());
        assert_eq!(p.replacement_token(), "-");
    }
}
