//! # icons 命令实现
//!
//! 从品牌 logo 批量生成各密度的启动图标。
//!
//! ## 功能
//! - 固定的密度目录 -> 边长映射（mdpi 到 xxxhdpi 五档）
//! - 缺失的目标目录自动创建
//! - 单个尺寸失败不影响其余尺寸
//!
//! ## 依赖关系
//! - 使用 `cli/icons.rs` 定义的参数
//! - 使用 `batch/runner.rs`, `transforms/icon.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, TransformResult};
use crate::cli::icons::IconsArgs;
use crate::error::{RelkitError, Result};
use crate::transforms::icon;
use crate::utils::output;

use std::fmt;

/// 密度目录与图标边长的静态映射
const DENSITY_BUCKETS: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// 单个图标生成任务
struct IconTarget {
    folder: &'static str,
    size: u32,
}

impl fmt::Display for IconTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.folder, self.size, self.size)
    }
}

/// 执行 icons 命令
pub fn execute(args: IconsArgs) -> Result<()> {
    output::print_header("Generating Launcher Icons");

    // 源图缺失是致命错误，批处理不会开始
    if !args.source.is_file() {
        return Err(RelkitError::MissingInput {
            path: args.source.display().to_string(),
        });
    }

    let targets: Vec<IconTarget> = DENSITY_BUCKETS
        .iter()
        .map(|&(folder, size)| IconTarget { folder, size })
        .collect();

    output::print_info(&format!(
        "Deriving {} icon variants from '{}'",
        targets.len(),
        args.source.display()
    ));

    let summary = BatchRunner::new("Generating").run(&targets, |target| {
        let dest = args.res_dir.join(target.folder).join(&args.filename);

        if dest.exists() && !args.overwrite {
            return TransformResult::Skipped(format!("{} (already exists)", target));
        }

        match icon::derive_icon(&args.source, target.size, &dest) {
            Ok(()) => TransformResult::Applied(format!("{} -> {}", target, dest.display())),
            Err(e) => TransformResult::Failed(target.to_string(), e.to_string()),
        }
    });

    super::report_summary(&summary);

    Ok(())
}
