//! # 终端审批
//!
//! 用 `console::Term` 在终端上逐项询问用户，实现 `Approver`。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 实现 `batch/review.rs` 的 `Approver`
//! - 使用 `console`, `colored`

use crate::batch::{Approver, Choice};
use crate::utils::output;

use colored::Colorize;
use console::Term;

/// 终端审批方
pub struct TerminalApprover {
    term: Term,
}

impl Default for TerminalApprover {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl TerminalApprover {
    fn ask(&self, prompt: &str, options: &str) -> Option<String> {
        output::print_separator();
        println!("{}", prompt);
        self.term
            .write_str(&format!("{} ", options.cyan().bold()))
            .ok();
        // 读取失败（如 stdin 关闭）视为放弃
        self.term
            .read_line()
            .ok()
            .map(|line| line.trim().to_lowercase())
    }
}

impl Approver for TerminalApprover {
    fn ask_yes_no_cancel(&mut self, prompt: &str) -> Choice {
        loop {
            match self.ask(prompt, "[y]es / [n]o / [c]ancel all:").as_deref() {
                Some("y") | Some("yes") => return Choice::Yes,
                Some("n") | Some("no") => return Choice::No,
                Some("c") | Some("cancel") | None => return Choice::Cancel,
                Some(_) => output::print_warning("Please answer y, n or c."),
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            match self.ask(prompt, "[y]es / [n]o:").as_deref() {
                Some("y") | Some("yes") => return true,
                Some("n") | Some("no") | None => return false,
                Some(_) => output::print_warning("Please answer y or n."),
            }
        }
    }
}
