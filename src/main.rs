//! # Tidyname - 文件名清洗工具
//!
//! 把用户随手起的文件/组件名转换成对文件系统和云存储都安全的名称，
//! 并可批量扫描目录树、逐项审核后重命名。
//!
//! ## 子命令
//! - `clean`  - 清洗给定名称
//! - `check`  - 校验名称并列出问题
//! - `rename` - 扫描目录树并批量重命名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (扫描、审核、应用)
//!   │     ├── cleaner/  (清洗管线与诊断)
//!   │     ├── tree/     (文件树与重命名接口)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cleaner;
mod cli;
mod commands;
mod error;
mod models;
mod tree;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
