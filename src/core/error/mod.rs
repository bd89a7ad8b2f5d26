//! 统一错误处理系统 for GraphKit
//!
//! ## 设计理念
//!
//! 1. **分层错误**：算法层与存储层各自使用枚举设计，简洁高效
//! 2. **分层转换**：层级错误通过 `#[from]` 自动转换为 `GraphError`
//! 3. **统一接口**：`GraphResult<T>` 提供统一的返回类型，简化错误传播
//!
//! 路径数量不足、候选路径含环、协作取消都不是错误，它们通过计算结果表达。

use thiserror::Error;

pub mod algorithm;
pub mod storage;

pub use algorithm::{AlgorithmError, AlgorithmResult};
pub use storage::{StorageError, StorageResult};

/// 统一的图库错误类型
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("算法错误: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(err: toml::ser::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}
