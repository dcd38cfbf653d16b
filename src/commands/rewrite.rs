//! # rewrite 命令实现
//!
//! 发布前批量替换源码树中的接口地址字面量。
//!
//! ## 功能
//! - 递归发现匹配模式的候选文件
//! - 逐文件全量替换，无变化的文件跳过
//! - 单个文件失败不影响其余文件
//!
//! ## 依赖关系
//! - 使用 `cli/rewrite.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `batch/runner.rs`, `transforms/endpoint.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, TransformResult};
use crate::cli::rewrite::RewriteArgs;
use crate::error::{RelkitError, Result};
use crate::transforms::endpoint::{self, RewriteOutcome};
use crate::utils::output;

use std::path::Path;

/// 执行 rewrite 命令
pub fn execute(args: RewriteArgs) -> Result<()> {
    output::print_header("Rewriting Endpoint URLs");

    // 根目录缺失是致命错误，批处理不会开始
    if !args.root.is_dir() {
        return Err(RelkitError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let files = FileCollector::new(args.root.clone())
        .with_pattern(&args.pattern)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.root.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} candidate files, replacing '{}' -> '{}'",
        files.len(),
        args.old,
        args.new
    ));

    // 以字符串形式传入批处理器，结果标签即文件路径
    let items: Vec<String> = files
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let summary = BatchRunner::new("Rewriting").run(&items, |item| {
        match endpoint::rewrite_endpoint(Path::new(item), &args.old, &args.new) {
            Ok(RewriteOutcome::Changed(count)) => {
                TransformResult::Applied(format!("{} ({} replaced)", item, count))
            }
            Ok(RewriteOutcome::Unchanged) => {
                TransformResult::Skipped(format!("{} (no changes)", item))
            }
            Err(e) => TransformResult::Failed(item.clone(), e.to_string()),
        }
    });

    super::report_summary(&summary);

    Ok(())
}
