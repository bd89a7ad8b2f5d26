//! 基于数组的有向图存储
//!
//! 顶点与边保存在连续数组中，通过 `VertexId` / `EdgeId` 句柄访问。
//! 允许平行边和自环；不支持删除，句柄在图的整个生命周期内保持有效。

use crate::core::error::{StorageError, StorageResult};

use super::traits::DirectedGraph;
use super::types::{EdgeId, EdgeRecord, VertexId};

/// 有向图
#[derive(Debug, Clone)]
pub struct DiGraph<V, E> {
    vertices: Vec<V>,
    edges: Vec<EdgeRecord<E>>,
    out_adj: Vec<Vec<EdgeId>>,
    in_adj: Vec<Vec<EdgeId>>,
}

impl<V, E> Default for DiGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> DiGraph<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            out_adj: Vec::with_capacity(vertices),
            in_adj: Vec::with_capacity(vertices),
        }
    }

    /// 添加顶点，返回新顶点的句柄
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(data);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        id
    }

    /// 添加一条从 `source` 到 `target` 的边
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, data: E) -> StorageResult<EdgeId> {
        if !self.has_vertex(source) {
            return Err(StorageError::VertexNotFound(source));
        }
        if !self.has_vertex(target) {
            return Err(StorageError::VertexNotFound(target));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeRecord {
            source,
            target,
            data,
        });
        self.out_adj[source.index()].push(id);
        self.in_adj[target.index()].push(id);
        Ok(id)
    }

    /// 添加一对方向相反的边，返回 (source->target, target->source)
    pub fn add_edge_pair(
        &mut self,
        a: VertexId,
        b: VertexId,
        data: E,
    ) -> StorageResult<(EdgeId, EdgeId)>
    where
        E: Clone,
    {
        let forward = self.add_edge(a, b, data.clone())?;
        let backward = self.add_edge(b, a, data)?;
        Ok((forward, backward))
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.index())
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&EdgeRecord<E>> {
        self.edges.get(id.index())
    }

    pub fn edge_data(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(id.index()).map(|record| &record.data)
    }

    /// 获取边数据，句柄无效时返回 `EdgeNotFound`
    pub fn try_edge_data(&self, id: EdgeId) -> StorageResult<&E> {
        self.edge_data(id).ok_or(StorageError::EdgeNotFound(id))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeRecord<E>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, record)| (EdgeId::new(index), record))
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, data)| (VertexId::new(index), data))
    }

    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_edges(vertex).len()
    }

    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.in_edges(vertex).len()
    }

    /// 按顶点数据线性查找第一个匹配的顶点
    pub fn find_vertex(&self, data: &V) -> Option<VertexId>
    where
        V: PartialEq,
    {
        self.vertices
            .iter()
            .position(|v| v == data)
            .map(VertexId::new)
    }

    /// 查找 `source` 到 `target` 的第一条边
    pub fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        self.out_edges(source)
            .iter()
            .copied()
            .find(|&e| self.edges[e.index()].target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V, E> DirectedGraph for DiGraph<V, E> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.has_vertex(vertex)
    }

    fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.out_adj
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn in_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.in_adj
            .get(vertex.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn source(&self, edge: EdgeId) -> VertexId {
        self.edges[edge.index()].source
    }

    fn target(&self, edge: EdgeId) -> VertexId {
        self.edges[edge.index()].target
    }
}
