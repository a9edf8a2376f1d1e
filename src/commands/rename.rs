//! # rename 命令实现
//!
//! 扫描本地目录树，审核并重命名名称有问题的文件。
//!
//! ## 功能
//! - 多个扫描根、按类别/模式过滤
//! - `--dry-run` 只输出重命名计划（表格，可导出 CSV）
//! - 交互式逐项审核，或 `--yes` 全部接受
//! - 汇总成功/跳过/失败
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `tree/fs.rs`, `cleaner/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/prompt.rs`

use crate::batch::{
    AcceptAll, Approver, IncludeFilter, RenameSession, ScanReport, Scanner, SessionEnd,
};
use crate::cleaner;
use crate::cli::rename::RenameArgs;
use crate::error::{Result, TidynameError};
use crate::models::RenameCandidate;
use crate::tree::{FsRenameSink, FsTree};
use crate::utils::prompt::TerminalApprover;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 重命名计划行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "New")]
    proposed: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Changes")]
    changes: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header(if args.dry_run {
        "Rename Plan (dry run)"
    } else {
        "Renaming Files"
    });

    // 验证扫描根
    for root in &args.roots {
        if !root.is_dir() {
            return Err(TidynameError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }
    }

    let policy = args.policy.to_policy()?;
    let filter = build_filter(&args)?;
    let tree = FsTree::new(args.roots.clone());
    let scanner = Scanner::new(&tree, &policy, &filter).recursive(!args.shallow);

    let included = if args.all {
        "all".to_string()
    } else {
        args.include
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    output::print_info(&format!("Including: {}", included));

    output::print_info(&format!(
        "Scanning {} root(s){}...",
        args.roots.len(),
        if args.shallow { " (shallow)" } else { "" }
    ));

    if args.dry_run {
        let scan = scan_with_spinner(|| scanner.scan_all(tree.roots()));
        report_scan(&scan);
        return show_plan(&scan.candidates, args.csv.as_deref());
    }

    let mut sink = FsRenameSink;
    let mut approver: Box<dyn Approver> = if args.yes {
        Box::new(AcceptAll)
    } else {
        Box::new(TerminalApprover::default())
    };

    let mut session = RenameSession::new(approver.as_mut(), &mut sink).with_progress(true);
    let scan = scan_with_spinner(|| session.scan(&scanner, tree.roots()));
    report_scan(&scan);

    if let Some(path) = args.csv.as_deref() {
        write_plan_csv(&scan.candidates, path)?;
        output::print_success(&format!("Rename plan saved to '{}'", path.display()));
    }

    let report = session.finish(scan);
    let message = report.message();

    match report.end {
        SessionEnd::Applied => output::print_summary(&message, report.outcome.failed.is_empty()),
        SessionEnd::NothingToRename => output::print_success(&message),
        _ => output::print_skip(&message),
    }

    Ok(())
}

/// 构造包含过滤器
fn build_filter(args: &RenameArgs) -> Result<IncludeFilter> {
    let filter = if args.all {
        IncludeFilter::all()
    } else {
        IncludeFilter::new(args.include.iter().copied())
    };

    match &args.pattern {
        Some(pattern) => filter.with_pattern(pattern),
        None => Ok(filter),
    }
}

/// 带 spinner 执行扫描
fn scan_with_spinner<F>(scan: F) -> ScanReport<PathBuf>
where
    F: FnOnce() -> ScanReport<PathBuf>,
{
    let pb = progress::create_spinner("Scanning");
    let report = scan();
    pb.finish_and_clear();
    report
}

/// 输出扫描统计与被跳过的错误
fn report_scan(scan: &ScanReport<PathBuf>) {
    for err in &scan.errors {
        output::print_warning(&format!("Skipped: {}", err));
    }
    output::print_info(&format!(
        "Checked {} file(s), {} need renaming",
        scan.visited,
        scan.candidates.len()
    ));
}

/// 输出重命名计划
fn show_plan(candidates: &[RenameCandidate<PathBuf>], csv_path: Option<&Path>) -> Result<()> {
    if candidates.is_empty() {
        output::print_success("No files with special characters found in the selected scope.");
        return Ok(());
    }

    let rows: Vec<PlanRow> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| PlanRow {
            index: i + 1,
            location: c.location_path.clone(),
            current: c.original_name.clone(),
            proposed: c.proposed_name.clone(),
            category: c.category.clone(),
            changes: cleaner::describe_changes(&c.original_name, &c.proposed_name).join(", "),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(path) = csv_path {
        write_plan_csv(candidates, path)?;
        output::print_success(&format!("Rename plan saved to '{}'", path.display()));
    }

    output::print_done(&format!(
        "{} file(s) would be renamed (dry run, nothing changed)",
        candidates.len()
    ));
    Ok(())
}

/// 保存重命名计划到 CSV
fn write_plan_csv<E>(candidates: &[RenameCandidate<E>], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for c in candidates {
        wtr.serialize(c.to_record())?;
    }

    wtr.flush().map_err(|e| TidynameError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
