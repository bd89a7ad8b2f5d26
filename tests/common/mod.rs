//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// 临时工作目录，测试结束后自动清理
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// 在临时目录中写入文件并返回路径
    pub fn write(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
