//! # rewrite 子命令 CLI 定义
//!
//! 发布前批量替换源码树中的接口地址字面量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rewrite.rs`

use clap::Args;
use std::path::PathBuf;

/// rewrite 子命令参数
#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Root directory of the source tree
    #[arg(short = 'd', long, default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern for candidate files
    #[arg(short, long, default_value = "*.dart")]
    pub pattern: String,

    /// Literal endpoint string to replace
    #[arg(long)]
    pub old: String,

    /// Replacement endpoint string
    #[arg(long)]
    pub new: String,
}
