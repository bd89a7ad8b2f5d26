//! 有向图访问接口
//!
//! 算法只通过该 trait 访问图结构，因此同一份实现既可以运行在原图上，
//! 也可以运行在 `Reversed` 反向视图上。

use super::types::{EdgeId, VertexId};

/// 支持双向邻接访问的有向图
pub trait DirectedGraph {
    /// 顶点数量
    fn vertex_count(&self) -> usize;

    /// 边数量
    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// 顶点的出边，按插入顺序排列；顶点不存在时返回空切片
    fn out_edges(&self, vertex: VertexId) -> &[EdgeId];

    /// 顶点的入边，按插入顺序排列；顶点不存在时返回空切片
    fn in_edges(&self, vertex: VertexId) -> &[EdgeId];

    /// 边的起点
    ///
    /// # Panics
    /// 句柄不属于该图时 panic
    fn source(&self, edge: EdgeId) -> VertexId;

    /// 边的终点
    ///
    /// # Panics
    /// 句柄不属于该图时 panic
    fn target(&self, edge: EdgeId) -> VertexId;

    fn is_self_loop(&self, edge: EdgeId) -> bool {
        self.source(edge) == self.target(edge)
    }

    /// 所有顶点句柄，按编号升序
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_count()).map(VertexId::new))
    }
}
