//! 反向最短路径树
//!
//! 在反向图上以目标顶点为源点运行 Dijkstra，得到每个能到达目标的顶点
//! 指向目标方向的最优后继边以及到目标的最优距离。

use crate::core::cancel::CancelToken;
use crate::core::error::AlgorithmResult;
use crate::graph::{DirectedGraph, EdgeId, Reversed, VertexId};
use crate::services::algorithm::dijkstra::Dijkstra;
use crate::services::algorithm::relaxer::DistanceRelaxer;

/// 指向目标顶点的最短路径树
#[derive(Debug, Clone, Default)]
pub struct ReverseTree {
    successors: Vec<Option<EdgeId>>,
    distances: Vec<Option<f64>>,
    cancelled: bool,
}

impl ReverseTree {
    /// 构建指向 `target` 的反向最短路径树
    ///
    /// 反向视图与原图共享边句柄，反向搜索记录的前驱边即原图中的后继边，无需转换。
    pub fn build<G, R>(
        graph: &G,
        target: VertexId,
        edge_weight: &dyn Fn(EdgeId) -> f64,
        relaxer: &R,
        cancel: &CancelToken,
    ) -> AlgorithmResult<Self>
    where
        G: DirectedGraph + ?Sized,
        R: DistanceRelaxer + ?Sized,
    {
        let reversed = Reversed::new(graph);
        let tree = Dijkstra::shortest_path_tree(&reversed, target, edge_weight, relaxer, Some(cancel))?;

        Ok(Self {
            successors: tree.predecessors,
            distances: tree.distances,
            cancelled: tree.cancelled,
        })
    }

    /// `vertex` 指向目标方向的下一条边；目标自身与不可达顶点返回 `None`
    pub fn successor(&self, vertex: VertexId) -> Option<EdgeId> {
        self.successors.get(vertex.index()).copied().flatten()
    }

    /// `vertex` 到目标的最优距离，不可达时返回 `None`
    pub fn distance_to_target(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(vertex.index()).copied().flatten()
    }

    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// 从 `start` 沿后继边走到目标，把经过的边追加到 `path`
    pub fn append_path_from<G: DirectedGraph + ?Sized>(
        &self,
        graph: &G,
        start: VertexId,
        path: &mut Vec<EdgeId>,
    ) {
        let mut current = start;
        // 树上的路径最多经过每个顶点一次
        for _ in 0..graph.vertex_count() {
            let Some(edge) = self.successor(current) else {
                break;
            };
            path.push(edge);
            current = graph.target(edge);
        }
    }

    /// 从 `start` 到目标的树路径
    pub fn path_from<G: DirectedGraph + ?Sized>(&self, graph: &G, start: VertexId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        self.append_path_from(graph, start, &mut path);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;
    use crate::services::algorithm::relaxer::ShortestDistance;

    #[test]
    fn test_reverse_tree() {
        let mut graph: DiGraph<u8, f64> = DiGraph::new();
        let ids: Vec<VertexId> = (0..5).map(|i| graph.add_vertex(i)).collect();
        let e01 = graph.add_edge(ids[0], ids[1], 1.0).expect("Edge should be added in test");
        graph.add_edge(ids[0], ids[2], 5.0).expect("Edge should be added in test");
        let e12 = graph.add_edge(ids[1], ids[2], 1.0).expect("Edge should be added in test");
        let e23 = graph.add_edge(ids[2], ids[3], 1.0).expect("Edge should be added in test");
        graph.add_edge(ids[3], ids[4], 1.0).expect("Edge should be added in test");

        let weight = |e: EdgeId| *graph.edge_data(e).expect("Edge should exist in test");
        let tree = ReverseTree::build(&graph, ids[3], &weight, &ShortestDistance, &CancelToken::new())
            .expect("Tree should build in test");

        assert_eq!(tree.distance_to_target(ids[0]), Some(3.0));
        assert_eq!(tree.distance_to_target(ids[3]), Some(0.0));
        // 4 无法到达 3
        assert_eq!(tree.distance_to_target(ids[4]), None);
        assert_eq!(tree.successor(ids[3]), None);
        assert_eq!(tree.reached_count(), 4);
        assert_eq!(tree.path_from(&graph, ids[0]), vec![e01, e12, e23]);
        assert!(tree.path_from(&graph, ids[4]).is_empty());
        assert!(!tree.is_cancelled());
    }

    #[test]
    fn test_missing_target() {
        let graph: DiGraph<u8, f64> = DiGraph::new();
        let weight = |_: EdgeId| 1.0;
        let result = ReverseTree::build(&graph, VertexId::new(0), &weight, &ShortestDistance, &CancelToken::new());
        assert!(result.is_err());
    }
}
