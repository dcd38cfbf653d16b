//! # icons 子命令 CLI 定义
//!
//! 从单张源图生成全套启动图标 (mdpi/hdpi/xhdpi/xxhdpi/xxxhdpi)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/icons.rs`

use clap::Args;
use std::path::PathBuf;

/// icons 子命令参数
#[derive(Args, Debug)]
pub struct IconsArgs {
    /// Source logo image
    #[arg(short, long, default_value = "app_icon.png")]
    pub source: PathBuf,

    /// Android resource root directory
    #[arg(short, long, default_value = "android/app/src/main/res")]
    pub res_dir: PathBuf,

    /// Output file name inside each density folder
    #[arg(short, long, default_value = "ic_launcher.png")]
    pub filename: String,

    /// Regenerate icons whose destination file already exists
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
