//! 算法层错误类型
//!
//! 所有前置条件错误在遍历开始之前检查并立即返回

use thiserror::Error;

use crate::graph::VertexId;

/// 算法层结果类型
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// 算法层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgorithmError {
    /// 构造时缺少必需的协作者（图、权重函数）
    #[error("缺少必需参数: {0}")]
    ArgumentNull(&'static str),

    #[error("参数越界: {name} = {value}, {reason}")]
    ArgumentOutOfRange {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 例如在设置根顶点或目标顶点之前调用 compute()
    #[error("无效状态: {0}")]
    InvalidState(String),

    #[error("顶点未找到: {0}")]
    VertexNotFound(VertexId),
}

impl AlgorithmError {
    pub fn out_of_range(name: &'static str, value: usize, reason: &'static str) -> Self {
        AlgorithmError::ArgumentOutOfRange {
            name,
            value: i64::try_from(value).unwrap_or(i64::MAX),
            reason,
        }
    }
}
