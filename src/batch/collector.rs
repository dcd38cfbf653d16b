//! # 文件收集器
//!
//! 根据根目录和文件名模式收集待处理文件列表。
//!
//! ## 功能
//! - 递归遍历任意深度的目录树
//! - 按文件名 glob 模式过滤
//! - 排序输出，保证批处理顺序可复现
//!
//! ## 依赖关系
//! - 被 `commands/rewrite.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 进行模式匹配

use crate::error::{RelkitError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 文件名匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            pattern: "*".to_string(),
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let glob_pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            RelkitError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        if !self.root.is_dir() {
            return Ok(vec![]);
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| glob_pattern.matches(name))
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &std::path::Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collects_matching_files_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("main.dart"));
        touch(&root.join("lib/api.dart"));
        touch(&root.join("lib/src/deep/client.dart"));
        touch(&root.join("lib/readme.md"));
        touch(&root.join("pubspec.yaml"));

        let files = FileCollector::new(root.to_path_buf())
            .with_pattern("*.dart")
            .collect()
            .unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().unwrap() == "dart"));
        assert!(files.contains(&root.join("lib/src/deep/client.dart")));
    }

    #[test]
    fn test_output_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("c.dart"));
        touch(&root.join("a.dart"));
        touch(&root.join("b.dart"));

        let files = FileCollector::new(root.to_path_buf())
            .with_pattern("*.dart")
            .collect()
            .unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let files = FileCollector::new(PathBuf::from("/nonexistent/relkit-test"))
            .with_pattern("*.dart")
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("[")
            .collect();
        assert!(result.is_err());
    }
}
