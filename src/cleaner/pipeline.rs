//! # 清洗管线
//!
//! 严格按以下顺序执行：
//! 1. 转小写
//! 2. 连续空白替换为单个标记
//! 3. 特殊字符逐个替换为标记
//! 4. 可打印 ASCII (0x20-0x7E) 以外的字符替换为标记
//! 5. 连续标记折叠为一个
//! 6. 去除首尾标记
//! 7. 结果为空时使用 `unnamed_file`
//!
//! 启用 `keep_extension` 时，末尾扩展名在 2-4 步之前拆出，4 步之后接回，
//! 分隔用的点不会被替换。
//!
//! ## 依赖关系
//! - 被 `batch/scanner.rs`, `commands/clean.rs` 使用
//! - 使用 `regex` 匹配空白

use crate::models::RenamePolicy;

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// 清洗结果为空时的兜底名称
pub const FALLBACK_NAME: &str = "unnamed_file";

/// 扩展名最大长度
const MAX_EXTENSION_LEN: usize = 16;

/// 禁止出现的特殊字符
pub const SPECIAL_CHARS: &[char] = &[
    '"', '\'', '/', '\\', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '=', '[', ']',
    '{', '}', ';', ':', '|', '<', '>', '?', ',', '.', '`', '~',
];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// 是否为特殊字符
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// 是否为可打印 ASCII（含空格）
pub fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// 按策略清洗文件名
///
/// 不会失败，返回值总是非空。
pub fn clean(name: &str, policy: &RenamePolicy) -> String {
    let token = policy.replacement_token();

    let lowered = if policy.to_lowercase() {
        name.to_lowercase()
    } else {
        name.to_string()
    };

    let (stem, extension) = if policy.keep_extension() {
        split_extension(&lowered)
    } else {
        (lowered.as_str(), None)
    };

    let mut cleaned = substitute(stem, policy);
    if let Some(ext) = extension {
        cleaned.push('.');
        cleaned.push_str(ext);
    }

    if !token.is_empty() {
        cleaned = collapse_token(&cleaned, token);
        cleaned = cleaned
            .trim_start_matches(token)
            .trim_end_matches(token)
            .to_string();
    }

    if cleaned.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    // 主干被完全清除，只剩扩展名
    if let Some(ext) = extension {
        let tail = format!(".{}", collapse_token(ext, token));
        if cleaned == tail {
            return format!("{}{}", FALLBACK_NAME, tail);
        }
    }

    cleaned
}

/// 拆出末尾扩展名
///
/// 扩展名以字母数字开头和结尾，中间允许 `_`（如 `x_t`）；
/// 以点开头的名称（隐藏文件）不视为有扩展名。
fn split_extension(name: &str) -> (&str, Option<&str>) {
    let Some(idx) = name.rfind('.') else {
        return (name, None);
    };
    if idx == 0 {
        return (name, None);
    }

    let ext = &name[idx + 1..];
    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && ext.starts_with(|c: char| c.is_ascii_alphanumeric())
        && ext.ends_with(|c: char| c.is_ascii_alphanumeric());

    if valid {
        (&name[..idx], Some(ext))
    } else {
        (name, None)
    }
}

/// 执行 2-4 步替换
fn substitute(stem: &str, policy: &RenamePolicy) -> String {
    let token = policy.replacement_token();
    let mut s = stem.to_string();

    if policy.replace_spaces() {
        s = WHITESPACE_RUN.replace_all(&s, NoExpand(token)).into_owned();
    }

    if policy.replace_special_chars() {
        s = replace_chars(&s, token, is_special);
    }

    if policy.replace_unicode() {
        s = replace_chars(&s, token, |c| !is_printable_ascii(c));
    }

    s
}

/// 将满足条件的字符逐个替换为标记
fn replace_chars(s: &str, token: &str, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if pred(c) {
            out.push_str(token);
        } else {
            out.push(c);
        }
    }
    out
}

/// 折叠连续重复的标记
fn collapse_token(s: &str, token: &str) -> String {
    if token.is_empty() {
        return s.to_string();
    }

    let doubled = token.repeat(2);
    let mut out = s.to_string();
    while out.contains(&doubled) {
        out = out.replace(&doubled, token);
    }
    out
}
