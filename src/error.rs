//! # 统一错误处理模块
//!
//! 定义 Relkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Relkit 统一错误类型
#[derive(Error, Debug)]
pub enum RelkitError {
    // ─────────────────────────────────────────────────────────────
    // 致命错误（在批处理开始前中止整个运行）
    // ─────────────────────────────────────────────────────────────
    #[error("Required input not found: {path}")]
    MissingInput { path: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误（单条目级别，由调用方折叠为 Failed）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解码错误（单条目级别）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image: {path}\nReason: {reason}")]
    ImageDecodeError { path: String, reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RelkitError>;
