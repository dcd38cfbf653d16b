//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `transforms/`, `utils/`
//! - 子模块: icons, rewrite

pub mod icons;
pub mod rewrite;

use crate::batch::BatchSummary;
use crate::cli::Commands;
use crate::error::Result;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Icons(args) => icons::execute(args),
        Commands::Rewrite(args) => rewrite::execute(args),
    }
}

/// 输出批处理汇总
///
/// 存在失败条目时先打印失败详情表格；失败不影响进程退出码。
fn report_summary(summary: &BatchSummary) {
    if summary.failed > 0 {
        output::print_failure_table(&summary.failures());
    }

    output::print_done(&format!(
        "{} applied, {} skipped, {} failed ({} total)",
        summary.applied,
        summary.skipped,
        summary.failed,
        summary.total()
    ));
}
