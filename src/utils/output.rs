//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 模块使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use tabled::{Table, Tabled};

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

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 失败详情表格行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 打印失败详情表格
pub fn print_failure_table(failures: &[(&str, &str)]) {
    let rows: Vec<FailureRow> = failures
        .iter()
        .map(|(item, reason)| FailureRow {
            item: (*item).to_string(),
            reason: (*reason).to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
