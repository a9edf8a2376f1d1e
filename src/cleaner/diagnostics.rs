//! # 名称诊断
//!
//! 找出名称中的问题字符并做基本校验。结果只用于向用户展示差异，
//! 不参与清洗流程的控制。
//!
//! ## 依赖关系
//! - 被 `batch/review.rs`, `commands/check.rs`, `commands/rename.rs` 使用
//! - 使用 `cleaner/pipeline.rs` 的字符集定义

use super::pipeline::{is_printable_ascii, is_special};

use std::collections::BTreeSet;

/// 名称最大长度（字符数）
pub const MAX_NAME_LEN: usize = 255;

/// Windows 保留设备名
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

fn is_problem_char(c: char) -> bool {
    c.is_whitespace() || is_special(c) || !is_printable_ascii(c)
}

/// 名称是否含有问题字符
pub fn has_problems(name: &str) -> bool {
    name.chars().any(is_problem_char)
}

/// 列出名称中的问题字符（去重、有序）
pub fn list_problem_chars(name: &str) -> BTreeSet<char> {
    name.chars().filter(|&c| is_problem_char(c)).collect()
}

/// 问题字符的可读形式
pub fn describe_char(c: char) -> String {
    if c == ' ' {
        "SPACE".to_string()
    } else if c.is_whitespace() || c.is_control() {
        format!("U+{:04X}", c as u32)
    } else {
        c.to_string()
    }
}

/// 问题字符的可读列表
pub fn describe_problems(name: &str) -> Vec<String> {
    list_problem_chars(name)
        .into_iter()
        .map(describe_char)
        .collect()
}

/// 用方括号标出问题字符，如 `My[ ]File[!]`
pub fn highlight(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if is_problem_char(c) {
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}

/// 校验名称是否适用于大多数系统
pub fn validate(name: &str) -> Validation {
    let mut issues = Vec::new();

    if name.is_empty() {
        issues.push("Filename is empty".to_string());
    }

    if name.chars().count() > MAX_NAME_LEN {
        issues.push(format!(
            "Filename is too long (>{} characters)",
            MAX_NAME_LEN
        ));
    }

    if has_problems(name) {
        issues.push(format!(
            "Contains problematic characters: {}",
            describe_problems(name).join(", ")
        ));
    }

    let upper = name.to_uppercase();
    if RESERVED_NAMES.contains(&upper.as_str()) {
        issues.push(format!("'{}' is a reserved system name", name));
    }

    Validation {
        is_valid: issues.is_empty(),
        issues,
    }
}

/// 描述原名到新名发生了哪些变化
pub fn describe_changes(original: &str, proposed: &str) -> Vec<&'static str> {
    let mut changes = Vec::new();
    if original == proposed {
        return changes;
    }

    let had_spaces = original.chars().any(char::is_whitespace);
    let has_spaces = proposed.chars().any(char::is_whitespace);
    if had_spaces && !has_spaces {
        changes.push("Replaced spaces");
    }

    let special = |s: &str| s.chars().any(|c| !c.is_whitespace() && is_problem_char(c));
    if special(original) && !special(proposed) {
        changes.push("Removed special characters");
    }

    if original.chars().any(char::is_uppercase) && !proposed.chars().any(char::is_uppercase) {
        changes.push("Converted to lowercase");
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_problems() {
        assert!(has_problems("My File.f3d"));
        assert!(has_problems("测试"));
        assert!(has_problems("a\tb"));
        assert!(!has_problems("normal_filename-v2"));
    }

    #[test]
    fn test_list_problem_chars() {
        let chars = list_problem_chars("a b!!c.测");
        assert_eq!(chars.len(), 4);
        assert!(chars.contains(&' '));
        assert!(chars.contains(&'!'));
        assert!(chars.contains(&'.'));
        assert!(chars.contains(&'测'));
    }

    #[test]
    fn test_describe_problems() {
        assert_eq!(describe_problems("a b\tc"), vec!["U+0009", "SPACE"]);
    }

    #[test]
    fn test_highlight() {
        assert_eq!(highlight("My File!"), "My[ ]File[!]");
        assert_eq!(highlight("clean"), "clean");
    }

    #[test]
    fn test_reserved_names() {
        let v = validate("COM1");
        assert!(!v.is_valid);
        assert!(v.issues.iter().any(|i| i.contains("reserved")));

        let v = validate("com1");
        assert!(!v.is_valid);
        assert!(v.issues.iter().any(|i| i.contains("reserved")));

        assert!(validate("COM10").is_valid);
        assert!(validate("console").is_valid);
    }

    #[test]
    fn test_validate_empty_and_long() {
        let v = validate("");
        assert!(!v.is_valid);
        assert_eq!(v.issues, vec!["Filename is empty"]);

        let v = validate(&"a".repeat(300));
        assert_eq!(v.issues, vec!["Filename is too long (>255 characters)"]);

        assert!(validate(&"a".repeat(255)).is_valid);
    }

    #[test]
    fn test_validate_problem_chars() {
        let v = validate("My File!");
        assert_eq!(v.issues, vec!["Contains problematic characters: SPACE, !"]);
    }

    #[test]
    fn test_describe_changes() {
        assert_eq!(
            describe_changes("My File!", "my_file"),
            vec![
                "Replaced spaces",
                "Removed special characters",
                "Converted to lowercase"
            ]
        );
        assert!(describe_changes("same", "same").is_empty());
    }
}
