//! 存储层错误类型
//!
//! 涵盖图的顶点/边存储以及图文档加载相关的错误

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;

/// 存储层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("顶点未找到: {0}")]
    VertexNotFound(VertexId),
    #[error("边未找到: {0}")]
    EdgeNotFound(EdgeId),
    #[error("重复的顶点名称: {0}")]
    DuplicateVertex(String),
    #[error("未知的顶点名称: {0}")]
    UnknownVertexName(String),
    #[error("无效的边权重: {from} -> {to} = {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },
    #[error("不支持的图文件格式: {0}")]
    UnsupportedFormat(String),
}
