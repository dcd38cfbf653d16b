//! # 接口地址替换变换
//!
//! 对单个文件做字面量字符串全量替换。
//!
//! ## 功能
//! - 替换文件中每一处旧地址
//! - 内容无变化时不回写（幂等，可安全重复执行）
//!
//! ## 依赖关系
//! - 被 `commands/rewrite.rs` 调用

use crate::error::{RelkitError, Result};

use std::fs;
use std::path::Path;

/// 单文件替换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// 已替换（携带替换次数）
    Changed(usize),
    /// 未发现旧地址，文件保持原样
    Unchanged,
}

/// 将 path 中每一处 old 替换为 new，仅在内容变化时回写
pub fn rewrite_endpoint(path: &Path, old: &str, new: &str) -> Result<RewriteOutcome> {
    let content = fs::read_to_string(path).map_err(|e| RelkitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let occurrences = content.matches(old).count();
    if occurrences == 0 {
        return Ok(RewriteOutcome::Unchanged);
    }

    let updated = content.replace(old, new);
    fs::write(path, updated).map_err(|e| RelkitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(RewriteOutcome::Changed(occurrences))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "http://localhost:3000";
    const NEW: &str = "https://api.example.com";

    #[test]
    fn test_replaces_every_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("api.dart");
        fs::write(
            &file,
            "const base = 'http://localhost:3000/api';\nconst ws = 'http://localhost:3000/ws';\n",
        )
        .unwrap();

        let outcome = rewrite_endpoint(&file, OLD, NEW).unwrap();
        assert_eq!(outcome, RewriteOutcome::Changed(2));

        let content = fs::read_to_string(&file).unwrap();
        assert!(!content.contains(OLD));
        assert_eq!(content.matches(NEW).count(), 2);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("api.dart");
        fs::write(&file, "const base = 'http://localhost:3000/api';\n").unwrap();

        rewrite_endpoint(&file, OLD, NEW).unwrap();
        let after_first = fs::read(&file).unwrap();

        let outcome = rewrite_endpoint(&file, OLD, NEW).unwrap();
        assert_eq!(outcome, RewriteOutcome::Unchanged);
        assert_eq!(fs::read(&file).unwrap(), after_first);
    }

    #[test]
    fn test_no_occurrence_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.dart");
        fs::write(&file, "void main() {}\n").unwrap();

        let outcome = rewrite_endpoint(&file, OLD, NEW).unwrap();
        assert_eq!(outcome, RewriteOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&file).unwrap(), "void main() {}\n");
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let result = rewrite_endpoint(Path::new("/nonexistent/api.dart"), OLD, NEW);
        assert!(matches!(result, Err(RelkitError::FileReadError { .. })));
    }
}
