//! # 美化输出工具
//!
//! 提供统一的终端输出样式。库代码不直接打印，由命令层调用这里。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `cleaner/diagnostics.rs` 标出问题字符
//! - 使用 `colored` crate

use crate::cleaner;

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印改名建议，原名中的问题字符标红
pub fn print_rename(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        "[OK]".green().bold(),
        mark_problems(from),
        "->".cyan(),
        to
    );
}

/// 多行汇总：首行带标签，其余行缩进
pub fn print_summary(msg: &str, clean_run: bool) {
    let mut lines = msg.lines();
    if let Some(first) = lines.next() {
        if clean_run {
            print_done(first);
        } else {
            print_warning(first);
        }
    }
    for line in lines {
        println!("       {}", line);
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 问题字符标红，其余字符变暗
fn mark_problems(name: &str) -> String {
    if !cleaner::has_problems(name) {
        return name.to_string();
    }
    let problems = cleaner::list_problem_chars(name);
    name.chars()
        .map(|c| {
            let s = c.to_string();
            if problems.contains(&c) {
                s.red().bold().to_string()
            } else {
                s.dimmed().to_string()
            }
        })
        .collect()
}
