//! 图的基础类型
//!
//! 顶点和边都以整数句柄引用，实际数据保存在 `DiGraph` 的数组中

use std::fmt;

/// 顶点句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 边句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 有向边记录
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<E> {
    pub source: VertexId,
    pub target: VertexId,
    pub data: E,
}

impl<E> EdgeRecord<E> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
