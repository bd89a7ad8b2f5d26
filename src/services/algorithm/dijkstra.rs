//! Dijkstra算法模块
//!
//! 单源最短路径，距离的合并与比较由松弛器决定。
//! 算法只依赖 `DirectedGraph`，因此可以直接运行在反向视图上。

use crate::core::cancel::CancelToken;
use crate::core::error::{AlgorithmError, AlgorithmResult};
use crate::graph::{DirectedGraph, EdgeId, VertexId};

use super::queue::RelaxedQueue;
use super::relaxer::DistanceRelaxer;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 最短路径树
///
/// `predecessors[v]` 是到达 `v` 的最优边，`distances[v]` 是源点到 `v` 的最优距离。
/// 源点不可达的顶点两者都为 `None`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPathTree {
    pub source: Option<VertexId>,
    pub predecessors: Vec<Option<EdgeId>>,
    pub distances: Vec<Option<f64>>,
    /// 搜索被取消时为 true，此时树只覆盖已经确定的部分
    pub cancelled: bool,
}

impl ShortestPathTree {
    pub fn distance_to(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    pub fn predecessor_of(&self, vertex: VertexId) -> Option<EdgeId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// 可达顶点数量（包括源点）
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// 沿前驱边回溯，重建源点到 `target` 的边序列
    pub fn path_to<G: DirectedGraph + ?Sized>(&self, graph: &G, target: VertexId) -> Option<Vec<EdgeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        while let Some(edge) = self.predecessor_of(current) {
            // 前驱链最多经过每个顶点一次
            if path.len() >= graph.vertex_count() {
                return None;
            }
            path.push(edge);
            current = graph.source(edge);
        }
        path.reverse();
        Some(path)
    }
}

impl Dijkstra {
    /// 计算从 `source` 出发的最短路径树
    ///
    /// # 参数
    /// - `graph`: 有向图（或其反向视图）
    /// - `source`: 起始顶点
    /// - `edge_weight`: 边权重函数
    /// - `relaxer`: 距离松弛器
    /// - `cancel`: 协作取消标志，检测到取消后返回已确定的部分结果
    ///
    /// # 返回
    /// 源点不在图中时返回 `VertexNotFound`
    pub fn shortest_path_tree<G, F, R>(
        graph: &G,
        source: VertexId,
        edge_weight: F,
        relaxer: &R,
        cancel: Option<&CancelToken>,
    ) -> AlgorithmResult<ShortestPathTree>
    where
        G: DirectedGraph + ?Sized,
        F: Fn(EdgeId) -> f64,
        R: DistanceRelaxer + ?Sized,
    {
        if !graph.contains_vertex(source) {
            return Err(AlgorithmError::VertexNotFound(source));
        }

        let n = graph.vertex_count();
        let mut tree = ShortestPathTree {
            source: Some(source),
            predecessors: vec![None; n],
            distances: vec![None; n],
            cancelled: false,
        };
        let mut finished = vec![false; n];
        let mut to_visit = RelaxedQueue::new(relaxer);

        tree.distances[source.index()] = Some(relaxer.initial_distance());
        to_visit.push(relaxer.initial_distance(), source);

        while let Some((distance, node)) = to_visit.pop() {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                tree.cancelled = true;
                break;
            }

            if finished[node.index()] {
                continue;
            }
            finished[node.index()] = true;

            for &edge in graph.out_edges(node) {
                let neighbor = graph.target(edge);
                if finished[neighbor.index()] {
                    continue;
                }

                let new_distance = relaxer.combine(distance, edge_weight(edge));
                let improves = match tree.distances[neighbor.index()] {
                    Some(current) => relaxer.is_better(new_distance, current),
                    None => true,
                };

                if improves {
                    tree.distances[neighbor.index()] = Some(new_distance);
                    tree.predecessors[neighbor.index()] = Some(edge);
                    to_visit.push(new_distance, neighbor);
                }
            }
        }

        Ok(tree)
    }

    /// 查找从起点到目标节点的最短路径
    pub fn shortest_path<G, F, R>(
        graph: &G,
        source: VertexId,
        target: VertexId,
        edge_weight: F,
        relaxer: &R,
    ) -> AlgorithmResult<Option<(Vec<EdgeId>, f64)>>
    where
        G: DirectedGraph + ?Sized,
        F: Fn(EdgeId) -> f64,
        R: DistanceRelaxer + ?Sized,
    {
        if !graph.contains_vertex(target) {
            return Err(AlgorithmError::VertexNotFound(target));
        }

        let tree = Self::shortest_path_tree(graph, source, edge_weight, relaxer, None)?;
        Ok(tree
            .path_to(graph, target)
            .zip(tree.distance_to(target)))
    }
}
